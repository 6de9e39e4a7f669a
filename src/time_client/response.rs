/// Response structure for the WorldTimeAPI timezone endpoint
/// Represents the JSON returned by worldtimeapi.org/api/timezone/{zone}
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TimeRecord {
    /// IANA timezone identifier (e.g., "America/Mexico_City")
    pub timezone: String,
    /// Timezone abbreviation (e.g., "CST")
    pub abbreviation: String,
    /// Local date and time, ISO-8601 (e.g., "2024-03-05T14:22:00.123456-06:00")
    pub datetime: String,
    /// Offset from UTC (e.g., "-06:00")
    pub utc_offset: String,
    /// Whether daylight saving time is currently in effect
    pub dst: bool,
    /// Day of the week: 1 = Monday .. 7 = Sunday (0 doubles as Sunday)
    pub day_of_week: u8,
    /// ISO week number of the year
    pub week_number: u8,

    // The API sends more than the screen shows; the rest stays optional so a
    // trimmed payload still decodes.
    /// Public IP address the server saw
    pub client_ip: Option<String>,
    /// Ordinal day of the year (1-366)
    pub day_of_year: Option<u16>,
    /// Start of the current DST period, if any
    pub dst_from: Option<String>,
    /// DST offset in seconds
    pub dst_offset: Option<i32>,
    /// End of the current DST period, if any
    pub dst_until: Option<String>,
    /// Offset from UTC in seconds, without DST
    pub raw_offset: Option<i32>,
    /// Seconds since the Unix epoch
    pub unixtime: Option<i64>,
    /// The same instant expressed in UTC
    pub utc_datetime: Option<String>,
}
