//! A weather station pushing temperature readings to two displays through the
//! same `ChangeNotifier` the editor uses for its live statistics.
//!
//! Run with `cargo run --example weather_station`.

use std::cell::Cell;

use pattern_pad::app::infrastructure::{Result, init_logging};
use pattern_pad::app::services::notifier::{ChangeNotifier, SubscriptionId};

struct WeatherStation {
    temperature: Cell<f32>,
    observers: ChangeNotifier<f32>,
}

impl WeatherStation {
    fn new() -> Self {
        Self {
            temperature: Cell::new(0.0),
            observers: ChangeNotifier::new(),
        }
    }

    fn add_observer<F>(&self, display: F) -> SubscriptionId
    where
        F: Fn(&f32) + 'static,
    {
        self.observers.subscribe(display)
    }

    fn remove_observer(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }

    fn set_temperature(&self, temperature: f32) -> Result<()> {
        self.temperature.set(temperature);
        self.observers.publish(&temperature)
    }

    fn temperature(&self) -> f32 {
        self.temperature.get()
    }
}

fn main() -> Result<()> {
    init_logging();

    let station = WeatherStation::new();
    let _phone = station.add_observer(|t: &f32| println!("[Phone] Temperature: {t}°C"));
    let window = station.add_observer(|t: &f32| println!("[Window] Temperature: {t}°C"));

    station.set_temperature(22.5)?;
    station.set_temperature(25.0)?;

    station.remove_observer(window);
    station.set_temperature(19.0)?;

    println!("Last reading: {}°C", station.temperature());
    Ok(())
}
