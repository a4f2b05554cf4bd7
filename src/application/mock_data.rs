// Mock environmental data - Synthetic observations and forecasts
use crate::application::environment::{Clock, RandomSource};
use crate::domain::observation::{diurnal_baseline, hour_label, ForecastPoint, MockObservation, Pollutants};
use chrono::Timelike;

pub const FORECAST_HOURS: u32 = 24;

/// Lowest AQI a forecast point may report.
const FORECAST_FLOOR: i32 = 20;
/// Forecast noise is drawn from `[-FORECAST_NOISE / 2, FORECAST_NOISE / 2)`.
const FORECAST_NOISE: u32 = 40;

/// Hand-assigned baseline AQI per city.
pub const CITY_BASELINES: &[(&str, i32)] = &[
    ("Delhi", 180),
    ("Mumbai", 120),
    ("Bangalore", 80),
    ("Chennai", 95),
    ("Kolkata", 160),
    ("Hyderabad", 110),
    ("Pune", 105),
    ("Ahmedabad", 140),
    ("Jaipur", 130),
    ("Lucknow", 170),
    ("Bhopal", 125),
    ("Current Location", 90),
];

/// Cities offered by the location search.
pub const POPULAR_CITIES: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

/// (scale, noise amplitude) applied to the baseline AQI, in pollutant order
/// pm25, pm10, o3, no2, so2, co.
const POLLUTANT_PROFILE: [(f64, f64); 6] = [
    (0.6, 20.0),
    (0.8, 30.0),
    (0.4, 15.0),
    (0.3, 10.0),
    (0.2, 8.0),
    (0.1, 5.0),
];

pub fn baseline_aqi(location: &str) -> Option<i32> {
    CITY_BASELINES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, aqi)| *aqi)
}

fn ranged(random: &dyn RandomSource, min: i32, span: u32) -> i32 {
    min + random.below(span) as i32
}

fn pollutant(random: &dyn RandomSource, aqi: i32, (scale, noise): (f64, f64)) -> i32 {
    (f64::from(aqi) * scale + random.unit() * noise).floor() as i32
}

/// Synthetic reading for a location. Unknown locations get a random baseline
/// in `[100, 200)`.
pub fn generate_observation(
    location: &str,
    clock: &dyn Clock,
    random: &dyn RandomSource,
) -> MockObservation {
    let aqi = match baseline_aqi(location) {
        Some(aqi) => aqi,
        None => ranged(random, 100, 100),
    };

    let temperature = ranged(random, 20, 15);
    let humidity = ranged(random, 40, 40);
    let wind_speed = ranged(random, 5, 20);
    let visibility = ranged(random, 2, 8);

    let [pm25, pm10, o3, no2, so2, co] =
        POLLUTANT_PROFILE.map(|profile| pollutant(random, aqi, profile));

    MockObservation {
        location: location.to_string(),
        aqi,
        last_updated: clock.now().format("%I:%M %p").to_string(),
        temperature,
        humidity,
        wind_speed,
        visibility,
        pollutants: Pollutants {
            pm25,
            pm10,
            o3,
            no2,
            so2,
            co,
        },
    }
}

/// Hourly forecast for the next day, starting at the current hour.
pub fn generate_forecast(clock: &dyn Clock, random: &dyn RandomSource) -> Vec<ForecastPoint> {
    let current_hour = clock.now().hour();

    (0..FORECAST_HOURS)
        .map(|offset| {
            let hour = (current_hour + offset) % 24;
            let noise = random.below(FORECAST_NOISE) as i32 - (FORECAST_NOISE / 2) as i32;
            let aqi = (diurnal_baseline(hour) + noise).max(FORECAST_FLOOR);
            ForecastPoint::new(hour_label(hour), aqi)
        })
        .collect()
}

/// Popular cities whose name contains `query`, ignoring case.
pub fn search_cities(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    POPULAR_CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::environment::fakes::{ConstantRandom, FixedClock, ScriptedRandom};
    use crate::infrastructure::environment::SeededRandom;

    #[test]
    fn test_delhi_pollutants_track_baseline() {
        let clock = FixedClock::at(9, 30);
        for fraction in [0.0, 0.25, 0.5, 0.999_999] {
            let observation = generate_observation("Delhi", &clock, &ConstantRandom(fraction));
            assert_eq!(observation.aqi, 180);
            let pm25 = observation.pollutants.pm25;
            assert!((108..128).contains(&pm25), "pm25 {} for {}", pm25, fraction);
        }

        let low = generate_observation("Delhi", &clock, &ConstantRandom(0.0));
        assert_eq!(
            low.pollutants,
            Pollutants {
                pm25: 108,
                pm10: 144,
                o3: 72,
                no2: 54,
                so2: 36,
                co: 18,
            }
        );
    }

    #[test]
    fn test_pollutant_ranges_for_seeded_runs() {
        let clock = FixedClock::at(14, 5);
        let random = SeededRandom::new(7);
        for _ in 0..200 {
            let o = generate_observation("Kolkata", &clock, &random);
            assert!((96..116).contains(&o.pollutants.pm25));
            assert!((128..158).contains(&o.pollutants.pm10));
            assert!((64..79).contains(&o.pollutants.o3));
            assert!((48..58).contains(&o.pollutants.no2));
            assert!((32..40).contains(&o.pollutants.so2));
            assert!((16..21).contains(&o.pollutants.co));
            assert!((20..35).contains(&o.temperature));
            assert!((40..80).contains(&o.humidity));
            assert!((5..25).contains(&o.wind_speed));
            assert!((2..10).contains(&o.visibility));
        }
    }

    #[test]
    fn test_unknown_location_fallback() {
        let clock = FixedClock::at(8, 0);
        let random = SeededRandom::new(42);
        for _ in 0..200 {
            let observation = generate_observation("Nowhereville", &clock, &random);
            assert!((100..200).contains(&observation.aqi));
            assert_eq!(observation.location, "Nowhereville");
        }

        let scripted = ScriptedRandom::new(vec![0.755]);
        assert_eq!(generate_observation("Atlantis", &clock, &scripted).aqi, 175);
    }

    #[test]
    fn test_location_lookup_is_exact() {
        assert_eq!(baseline_aqi("Current Location"), Some(90));
        assert_eq!(baseline_aqi("Bhopal"), Some(125));
        assert_eq!(baseline_aqi("delhi"), None);
    }

    #[test]
    fn test_last_updated_format() {
        let random = ConstantRandom(0.3);
        assert_eq!(
            generate_observation("Pune", &FixedClock::at(14, 5), &random).last_updated,
            "02:05 PM"
        );
        assert_eq!(
            generate_observation("Pune", &FixedClock::at(0, 45), &random).last_updated,
            "12:45 AM"
        );
    }

    #[test]
    fn test_forecast_wraps_past_midnight() {
        let forecast = generate_forecast(&FixedClock::at(23, 10), &ConstantRandom(0.5));
        assert_eq!(forecast.len(), 24);
        assert_eq!(forecast[0].time, "11 PM");
        assert_eq!(forecast[1].time, "12 AM");
        assert_eq!(forecast[2].time, "1 AM");
        assert_eq!(forecast[23].time, "10 PM");
    }

    #[test]
    fn test_forecast_follows_diurnal_profile() {
        // Zero noise at fraction 0.5: every point sits on its baseline.
        let forecast = generate_forecast(&FixedClock::at(0, 0), &ConstantRandom(0.5));
        let values: Vec<i32> = forecast.iter().map(|p| p.aqi).collect();
        assert_eq!(values[0], 90);
        assert_eq!(values[6], 80);
        assert_eq!(values[12], 150);
        assert_eq!(values[18], 180);
        assert_eq!(values[23], 90);
    }

    #[test]
    fn test_forecast_noise_bounds() {
        let clock = FixedClock::at(5, 0);
        let low = generate_forecast(&clock, &ConstantRandom(0.0));
        let high = generate_forecast(&clock, &ConstantRandom(0.999_999));
        assert_eq!(low[0].aqi, 70);
        assert_eq!(high[0].aqi, 109);

        let random = SeededRandom::new(3);
        for _ in 0..50 {
            for point in generate_forecast(&clock, &random) {
                assert!(point.aqi >= 20);
                assert!(point.aqi < 200);
            }
        }
    }

    #[test]
    fn test_search_cities() {
        assert_eq!(search_cities("pu"), vec!["Pune", "Jaipur"]);
        assert_eq!(search_cities("  DEL "), vec!["Delhi"]);
        assert_eq!(search_cities("a").len(), 7);
        assert!(search_cities("   ").is_empty());
        assert!(search_cities("Bhopal").is_empty());
    }
}
