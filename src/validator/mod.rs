//! Structural validation of component trees.
//!
//! Every component of the tree is checked, parents before children. Names and values must survive
//! a trip through the encoder and back, and then three rule classes apply: which child components
//! its kind may hold, which properties exclude or require each other, and how often a property may
//! occur. The first violation found is returned and the tree is left untouched.

mod error;
pub use error::ValidationError;

use crate::{
    Component, ComponentKind, Property,
    parser::is_name_token,
    tables::{self, BEGIN, END, prop},
};

/// Check `component` and all its descendants.
#[tracing::instrument(skip(component), fields(name = %component.name), level = "debug")]
pub fn validate(component: &Component) -> Result<(), ValidationError> {
    if component.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !is_name_token(&component.name) {
        return Err(ValidationError::InvalidName(component.name.clone()));
    }
    let kind = component.kind();
    if let Some(property) = component.properties.iter().find(|prop| !is_encodable(prop)) {
        return Err(ValidationError::InvalidProperty {
            component: kind,
            property: property.name.clone(),
        });
    }
    check_shape(component, &kind)?;
    check_properties(component, &kind)?;
    check_cardinality(component, &kind)?;

    component.components.iter().try_for_each(validate)
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\r', '\n'])
}

/// Whether `property` is written as a single content line that decodes to the same property.
fn is_encodable(property: &Property) -> bool {
    is_name_token(&property.name)
        && !property.name.eq_ignore_ascii_case(BEGIN)
        && !property.name.eq_ignore_ascii_case(END)
        && !has_line_break(&property.value)
        && property.params.iter().all(|(key, values)| {
            is_name_token(key) && !values.iter().any(|value| has_line_break(value))
        })
}

fn check_shape(component: &Component, kind: &ComponentKind) -> Result<(), ValidationError> {
    let only_children = |allowed: &[ComponentKind]| {
        match component
            .components
            .iter()
            .map(Component::kind)
            .find(|child| !allowed.contains(child))
        {
            Some(child) => Err(ValidationError::ForbiddenComponent {
                parent: kind.clone(),
                child,
            }),
            None => Ok(()),
        }
    };

    match kind {
        ComponentKind::Calendar | ComponentKind::Timezone if component.components.is_empty() => {
            Err(ValidationError::MissingComponents(kind.clone()))
        }
        ComponentKind::Timezone => {
            only_children(&[ComponentKind::Standard, ComponentKind::Daylight])
        }
        ComponentKind::Event | ComponentKind::Todo => only_children(&[ComponentKind::Alarm]),
        ComponentKind::Journal | ComponentKind::FreeBusy if !component.components.is_empty() => {
            Err(ValidationError::UnexpectedComponents(kind.clone()))
        }
        _ => Ok(()),
    }
}

fn check_properties(component: &Component, kind: &ComponentKind) -> Result<(), ValidationError> {
    let conflict = |first: &'static str, second: &'static str| {
        if component.has_property(first) && component.has_property(second) {
            return Err(ValidationError::PropertyConflict {
                component: kind.clone(),
                first,
                second,
            });
        }
        Ok(())
    };

    match kind {
        ComponentKind::Calendar => {
            // A published event (no METHOD) takes its start from the calendar
            let unscheduled_event = component
                .events()
                .any(|event| !event.has_property(prop::METHOD));
            if unscheduled_event && !component.has_property(prop::DTSTART) {
                return Err(ValidationError::MissingCalendarStart(kind.clone()));
            }
        }
        ComponentKind::Event => conflict(prop::DTEND, prop::DURATION)?,
        ComponentKind::Todo => {
            conflict(prop::DUE, prop::DURATION)?;
            if component.has_property(prop::DURATION) && !component.has_property(prop::DTSTART) {
                return Err(ValidationError::MissingDependency {
                    component: kind.clone(),
                    property: prop::DURATION,
                    required: prop::DTSTART,
                });
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_cardinality(component: &Component, kind: &ComponentKind) -> Result<(), ValidationError> {
    let name = kind.to_string();
    for &property in tables::exactly_one(&name) {
        let count = component.count_properties(property);
        if count != 1 {
            return Err(ValidationError::ExactlyOne {
                component: kind.clone(),
                property,
                count,
            });
        }
    }
    for &property in tables::at_most_one(&name) {
        let count = component.count_properties(property);
        if count > 1 {
            return Err(ValidationError::AtMostOne {
                component: kind.clone(),
                property,
                count,
            });
        }
    }
    Ok(())
}
