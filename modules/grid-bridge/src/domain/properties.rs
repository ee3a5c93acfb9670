/// Resource kind a property applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Scheduler,
    FileSystem,
}

/// Value type of a configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Boolean,
    Integer,
    Long,
    Double,
    Size,
}

/// A configuration property an adaptor understands.
///
/// Created once at adaptor registration and read-only afterwards; the wire
/// mappers filter and project these, never mutate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescription {
    pub name: String,
    pub description: String,
    pub property_type: PropertyType,
    pub default_value: Option<String>,
    pub levels: Vec<Component>,
}

impl PropertyDescription {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        property_type: PropertyType,
        default_value: Option<String>,
        description: impl Into<String>,
        levels: Vec<Component>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            property_type,
            default_value,
            levels,
        }
    }
}

/// Registration-time description of an adaptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptorDescription {
    pub name: String,
    pub description: String,
    pub supported_locations: Vec<String>,
    pub supported_properties: Vec<PropertyDescription>,
}
