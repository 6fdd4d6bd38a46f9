use crate::console::{Console, HasConsole, SharedConsole};
use crate::heater::{HasHeater, Heater, SharedHeater};
use crate::pump::{HasPump, Pump, SharedPump};

// =============================================================================
// CoffeeMaker: drives the heater and the pump in sequence
// =============================================================================

pub struct CoffeeMaker {
    heater: SharedHeater,
    pump: SharedPump,
    console: SharedConsole,
}

impl CoffeeMaker {
    pub fn new(config: &(impl HasHeater + HasPump + HasConsole)) -> Self {
        CoffeeMaker {
            heater: config.heater(),
            pump: config.pump(),
            console: config.console(),
        }
    }

    // Always runs to completion: a pump that declines to pump (cold
    // heater at the moment of the call) still leaves the heater off
    // and the completion line printed.
    pub fn brew(&mut self) {
        self.heater.borrow_mut().on();
        self.pump.borrow_mut().pump();
        self.console.borrow_mut().line(" [_]P coffee! [_]P ");
        self.heater.borrow_mut().off();
    }
}
