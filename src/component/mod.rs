//! The component tree: a named node holding properties and child components, both in insertion
//! order.

use derive_more::Display;

use crate::{
    Property,
    tables::{comp, prop},
};

const DEFAULT_PRODID: &str = concat!("-//calcodec//calcodec ", env!("CARGO_PKG_VERSION"), "//EN");

/// Kind of a component, derived from its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ComponentKind {
    #[display("VCALENDAR")]
    Calendar,
    #[display("VEVENT")]
    Event,
    #[display("VTODO")]
    Todo,
    #[display("VJOURNAL")]
    Journal,
    #[display("VFREEBUSY")]
    FreeBusy,
    #[display("VTIMEZONE")]
    Timezone,
    #[display("STANDARD")]
    Standard,
    #[display("DAYLIGHT")]
    Daylight,
    #[display("VALARM")]
    Alarm,
    /// An iana-token or x-name component, kept uppercased.
    #[display("{_0}")]
    Other(String),
}

impl ComponentKind {
    pub fn from_name(name: &str) -> Self {
        let upper = name.to_ascii_uppercase();
        match upper.as_str() {
            comp::CALENDAR => Self::Calendar,
            comp::EVENT => Self::Event,
            comp::TODO => Self::Todo,
            comp::JOURNAL => Self::Journal,
            comp::FREEBUSY => Self::FreeBusy,
            comp::TIMEZONE => Self::Timezone,
            comp::STANDARD => Self::Standard,
            comp::DAYLIGHT => Self::Daylight,
            comp::ALARM => Self::Alarm,
            _ => Self::Other(upper),
        }
    }
}

/// A calendar component (`BEGIN:<name>` ... `END:<name>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    /// Component name, uppercased.
    pub name: String,
    pub properties: Vec<Property>,
    pub components: Vec<Component>,
}

impl Component {
    pub fn new(name: &str) -> Self {
        Component {
            name: name.to_uppercase(),
            ..Default::default()
        }
    }

    /// An empty VCALENDAR with `VERSION:2.0` and a default `PRODID`.
    pub fn calendar() -> Self {
        let mut calendar = Component::new(comp::CALENDAR);
        calendar.add_property(Property::with_value(prop::VERSION, "2.0"));
        calendar.add_property(Property::with_value(prop::PRODID, DEFAULT_PRODID));
        calendar
    }

    #[inline]
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::from_name(&self.name)
    }

    /// First property with the given name.
    pub fn get_property<'c>(&'c self, name: &str) -> Option<&'c Property> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn get_named_properties<'c>(
        &'c self,
        name: &'c str,
    ) -> impl Iterator<Item = &'c Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    #[inline]
    pub fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }

    #[inline]
    pub fn count_properties(&self, name: &str) -> usize {
        self.get_named_properties(name).count()
    }

    #[inline]
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Remove all properties with the given name.
    pub fn remove_property(&mut self, name: &str) {
        self.properties
            .retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    #[inline]
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn components_of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }

    #[inline]
    pub fn events(&self) -> impl Iterator<Item = &Component> {
        self.components_of_kind(ComponentKind::Event)
    }
}
