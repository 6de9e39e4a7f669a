// Display formatting for the values the screen shows. These helpers never
// fail upward: malformed input comes back unchanged so the screen always has
// something to render.

/// Extracts "HH:MM" from an ISO-8601 datetime string and appends " hrs".
///
/// Input too short (or sliced off a UTF-8 boundary) is returned unchanged.
pub fn format_time(datetime: &str) -> String {
    match datetime.get(11..16) {
        Some(time_part) => format!("{} hrs", time_part),
        None => datetime.to_string(),
    }
}

/// Turns the "YYYY-MM-DD" prefix of an ISO-8601 datetime into "DD/MM/YYYY".
///
/// Input whose prefix is missing or not dash-separated into exactly year,
/// month and day is returned unchanged.
pub fn format_date(datetime: &str) -> String {
    let Some(date_part) = datetime.get(..10) else {
        return datetime.to_string();
    };
    let parts: Vec<&str> = date_part.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => datetime.to_string(),
    }
}

/// Spanish weekday name for the server's day number (1 = Monday .. 7 = Sunday).
pub fn day_name(day_number: u8) -> &'static str {
    match day_number {
        1 => "Lunes",
        2 => "Martes",
        3 => "Miércoles",
        4 => "Jueves",
        5 => "Viernes",
        6 => "Sábado",
        7 => "Domingo",
        // in case the API ever switches to a zero-based week
        0 => "Domingo",
        _ => "Día Desconocido",
    }
}
