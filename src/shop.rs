use std::cell::RefCell;
use std::rc::Rc;

use crate::console::{terminal, HasConsole, SharedConsole};
use crate::heater::{ElectricHeater, HasHeater, SharedHeater};
use crate::maker::CoffeeMaker;
use crate::pump::{HasPump, LoggingPump, SharedPump, Thermosiphon};

// =============================================================================
// Composition root: one heater, one pump, wired once
// =============================================================================

// Staging bundle used while the shop is still being assembled: the
// heater exists, the pump does not yet. The Thermosiphon only ever
// sees this narrow view, never the finished shop.
struct BoilerRoom {
    heater: SharedHeater,
    console: SharedConsole,
}

impl HasHeater for BoilerRoom {
    fn heater(&self) -> SharedHeater {
        self.heater.clone()
    }
}

impl HasConsole for BoilerRoom {
    fn console(&self) -> SharedConsole {
        self.console.clone()
    }
}

/// Owns the object graph for one application instance. Every consumer
/// that asks for the heater or the pump gets a handle to the same one.
pub struct CoffeeShop {
    console: SharedConsole,
    heater: SharedHeater,
    pump: SharedPump,
}

impl CoffeeShop {
    pub fn open() -> Self {
        Self::open_with(terminal())
    }

    pub fn open_with(console: SharedConsole) -> Self {
        let heater: SharedHeater =
            Rc::new(RefCell::new(ElectricHeater::new(console.clone())));
        let boiler_room = BoilerRoom {
            heater: heater.clone(),
            console: console.clone(),
        };
        let pump: SharedPump = Rc::new(RefCell::new(Thermosiphon::new(&boiler_room)));
        CoffeeShop {
            console,
            heater,
            pump,
        }
    }

    /// Second wiring of the same shop: the maker's pump binding now
    /// goes through a LoggingPump. Heater and siphon are the instances
    /// the shop already had; nothing about CoffeeMaker changes.
    pub fn with_logged_pump(mut self) -> Self {
        let wrapped = self.pump;
        self.pump = Rc::new(RefCell::new(LoggingPump::new(
            wrapped,
            self.console.clone(),
        )));
        self
    }

    pub fn maker(&self) -> CoffeeMaker {
        CoffeeMaker::new(self)
    }
}

impl HasHeater for CoffeeShop {
    fn heater(&self) -> SharedHeater {
        self.heater.clone()
    }
}

impl HasPump for CoffeeShop {
    fn pump(&self) -> SharedPump {
        self.pump.clone()
    }
}

impl HasConsole for CoffeeShop {
    fn console(&self) -> SharedConsole {
        self.console.clone()
    }
}
