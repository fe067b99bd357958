use crate::ComponentKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("component without a name")]
    EmptyName,
    #[error("invalid component name {0:?}")]
    InvalidName(String),
    #[error("{component} has a property {property:?} that cannot be encoded")]
    InvalidProperty {
        component: ComponentKind,
        property: String,
    },
    #[error("{0} must contain at least one component")]
    MissingComponents(ComponentKind),
    #[error("{parent} must not contain a {child} component")]
    ForbiddenComponent {
        parent: ComponentKind,
        child: ComponentKind,
    },
    #[error("{0} must not contain any components")]
    UnexpectedComponents(ComponentKind),
    #[error("property conflict in {component}: both {first} and {second} are defined")]
    PropertyConflict {
        component: ComponentKind,
        first: &'static str,
        second: &'static str,
    },
    #[error("{component} with {property} requires {required}")]
    MissingDependency {
        component: ComponentKind,
        property: &'static str,
        required: &'static str,
    },
    #[error("{0} requires DTSTART when a VEVENT has no METHOD")]
    MissingCalendarStart(ComponentKind),
    #[error("{component} must have exactly one {property}, found {count}")]
    ExactlyOne {
        component: ComponentKind,
        property: &'static str,
        count: usize,
    },
    #[error("{component} must have at most one {property}, found {count}")]
    AtMostOne {
        component: ComponentKind,
        property: &'static str,
        count: usize,
    },
}
