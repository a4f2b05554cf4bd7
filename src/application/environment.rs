// Ports for wall-clock time and randomness used by the mock generator
use chrono::NaiveDateTime;

pub trait Clock: Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

pub trait RandomSource: Send + Sync {
    /// Uniform real number in `[0, 1)`
    fn unit(&self) -> f64;

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let value = (self.unit() * f64::from(bound)).floor() as u32;
        value.min(bound - 1)
    }
}

#[cfg(test)]
pub mod fakes {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    /// Clock frozen at a fixed time of day.
    pub struct FixedClock(pub NaiveDateTime);

    impl FixedClock {
        pub fn at(hour: u32, minute: u32) -> Self {
            let time = NaiveDate::from_ymd_opt(2024, 11, 5)
                .and_then(|d| d.and_hms_opt(hour, minute, 0))
                .expect("valid test time");
            Self(time)
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    /// Random source that always yields the same fraction.
    pub struct ConstantRandom(pub f64);

    impl RandomSource for ConstantRandom {
        fn unit(&self) -> f64 {
            self.0
        }
    }

    /// Random source replaying a fixed sequence, then repeating its last value.
    pub struct ScriptedRandom {
        values: Mutex<Vec<f64>>,
        last: Mutex<f64>,
    }

    impl ScriptedRandom {
        pub fn new(mut values: Vec<f64>) -> Self {
            values.reverse();
            Self {
                values: Mutex::new(values),
                last: Mutex::new(0.0),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn unit(&self) -> f64 {
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.values.lock().unwrap().pop() {
                *last = next;
            }
            *last
        }
    }
}
