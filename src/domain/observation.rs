// Observation and forecast domain models

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pollutants {
    pub pm25: i32,
    pub pm10: i32,
    pub o3: i32,
    pub no2: i32,
    pub so2: i32,
    pub co: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockObservation {
    pub location: String,
    pub aqi: i32,
    pub last_updated: String,
    pub temperature: i32,
    pub humidity: i32,
    pub wind_speed: i32,
    pub visibility: i32,
    pub pollutants: Pollutants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPoint {
    pub time: String,
    pub aqi: i32,
}

impl ForecastPoint {
    pub fn new(time: String, aqi: i32) -> Self {
        Self { time, aqi }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSummary {
    pub peak: ForecastPoint,
    pub best: ForecastPoint,
}

/// 12-hour clock label for an hour of the day ("12 AM", "7 AM", "12 PM", "3 PM").
pub fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{} AM", hour),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}

/// Typical AQI for an hour of the day: clean mornings, a hazy afternoon and
/// an evening rush peak.
pub fn diurnal_baseline(hour: u32) -> i32 {
    match hour {
        6..=10 => 80,
        11..=16 => 150,
        17..=21 => 180,
        _ => 90,
    }
}

/// Peak and best hours of a forecast. Ties resolve to the earliest point.
pub fn summarize_forecast(points: &[ForecastPoint]) -> Option<ForecastSummary> {
    let first = points.first()?;
    let mut peak = first;
    let mut best = first;

    for point in &points[1..] {
        if point.aqi > peak.aqi {
            peak = point;
        }
        if point.aqi < best.aqi {
            best = point;
        }
    }

    Some(ForecastSummary {
        peak: peak.clone(),
        best: best.clone(),
    })
}
