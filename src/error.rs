use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub FieldError
    Missing = "missing or empty",
    InvalidLatitude{value: String} = "invalid latitude '{value}'",
    InvalidLongitude{value: String} = "invalid longitude '{value}'",
    InvalidElevation{value: String} = "invalid elevation '{value}'",
    InvalidStyle{value: String} = "invalid style '{value}'"
}

custom_error! {pub Error
    InvalidParameter{reason: String} = "{reason}",
    InvalidWaypoint{field: &'static str, source: FieldError} = "invalid waypoint: {field} is {source}",
    NoWaypointsFound = "No waypoints found in file",
    AllWaypointsInvalid{count: usize} = "No valid waypoints found in file ({count} rejected)",
    FileTooLarge{size: u64} = "File is too large ({size} bytes). Maximum size is 5MB",
    UnsupportedFileType{name: String} = "'{name}' is not a CUP file",
    FileReadFailure{source: std::io::Error} = "Failed to read file: {source}"
}

impl Error {
    pub(crate) fn invalid_waypoint(field: &'static str) -> impl FnOnce(FieldError) -> Error {
        move |source| Error::InvalidWaypoint { field, source }
    }
}
