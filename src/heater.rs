use std::cell::RefCell;
use std::rc::Rc;

use crate::console::{Console, SharedConsole};

// =============================================================================
// Heater capability
// =============================================================================

pub trait Heater {
    fn on(&mut self);
    fn off(&mut self);
    fn is_hot(&self) -> bool;
}

pub type SharedHeater = Rc<RefCell<dyn Heater>>;

/// Configuration capability: this bundle can hand out the shared heater.
pub trait HasHeater {
    fn heater(&self) -> SharedHeater;
}

/// The stock heater: hot the moment it is switched on. A heater that
/// warms up over time is just another `Heater` impl wired in its place.
pub struct ElectricHeater {
    console: SharedConsole,
    heating: bool,
}

impl ElectricHeater {
    pub fn new(console: SharedConsole) -> Self {
        ElectricHeater {
            console,
            heating: false,
        }
    }
}

impl Heater for ElectricHeater {
    fn on(&mut self) {
        self.console.borrow_mut().line("~ ~ ~ heating ~ ~ ~");
        self.heating = true;
    }

    fn off(&mut self) {
        self.heating = false;
    }

    fn is_hot(&self) -> bool {
        self.heating
    }
}
