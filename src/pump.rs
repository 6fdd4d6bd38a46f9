use std::cell::RefCell;
use std::rc::Rc;

use crate::console::{Console, HasConsole, SharedConsole};
use crate::heater::{HasHeater, Heater, SharedHeater};

// =============================================================================
// Pump capability, siphon implementation, logging decorator
// =============================================================================

pub trait Pump {
    fn pump(&mut self);
}

pub type SharedPump = Rc<RefCell<dyn Pump>>;

/// Configuration capability: this bundle can hand out the shared pump.
pub trait HasPump {
    fn pump(&self) -> SharedPump;
}

/// Pumps only while the heater it was wired to reports hot. Pumping
/// against a cold heater is a silent no-op, not an error.
pub struct Thermosiphon {
    heater: SharedHeater,
    console: SharedConsole,
}

impl Thermosiphon {
    pub fn new(config: &(impl HasHeater + HasConsole)) -> Self {
        Thermosiphon {
            heater: config.heater(),
            console: config.console(),
        }
    }
}

impl Pump for Thermosiphon {
    fn pump(&mut self) {
        if self.heater.borrow().is_hot() {
            self.console.borrow_mut().line("=> => pumping => =>");
        }
    }
}

/// Decorator: same Pump capability, with a marker line before and
/// after the delegated call. The wrapped pump is untouched.
pub struct LoggingPump {
    inner: SharedPump,
    console: SharedConsole,
}

impl LoggingPump {
    pub fn new(inner: SharedPump, console: SharedConsole) -> Self {
        LoggingPump { inner, console }
    }
}

impl Pump for LoggingPump {
    fn pump(&mut self) {
        self.console.borrow_mut().line("[pump] starting");
        self.inner.borrow_mut().pump();
        self.console.borrow_mut().line("[pump] finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    // Heater fake with a scripted temperature, independent of on()/off().
    struct ScriptedHeater {
        hot: bool,
    }

    impl Heater for ScriptedHeater {
        fn on(&mut self) {}
        fn off(&mut self) {}
        fn is_hot(&self) -> bool {
            self.hot
        }
    }

    struct Rig {
        heater: Rc<RefCell<ScriptedHeater>>,
        console: SharedConsole,
    }

    impl HasHeater for Rig {
        fn heater(&self) -> SharedHeater {
            self.heater.clone()
        }
    }

    impl HasConsole for Rig {
        fn console(&self) -> SharedConsole {
            self.console.clone()
        }
    }

    fn rig(hot: bool, transcript: Rc<RefCell<Transcript>>) -> Rig {
        Rig {
            heater: Rc::new(RefCell::new(ScriptedHeater { hot })),
            console: transcript,
        }
    }

    #[test]
    fn cold_heater_gates_the_pump() {
        let transcript = Transcript::new();
        let mut siphon = Thermosiphon::new(&rig(false, transcript.clone()));
        siphon.pump();
        assert!(transcript.borrow().lines().is_empty());
    }

    #[test]
    fn hot_heater_pumps_exactly_once_per_call() {
        let transcript = Transcript::new();
        let mut siphon = Thermosiphon::new(&rig(true, transcript.clone()));
        siphon.pump();
        assert_eq!(transcript.borrow().lines(), ["=> => pumping => =>"]);
    }

    #[test]
    fn siphon_reacts_to_heater_state_changes() {
        let transcript = Transcript::new();
        let rig = rig(false, transcript.clone());
        let mut siphon = Thermosiphon::new(&rig);

        siphon.pump();
        rig.heater.borrow_mut().hot = true;
        siphon.pump();

        assert_eq!(transcript.borrow().lines().len(), 1);
    }

    #[test]
    fn logging_pump_brackets_the_delegated_call() {
        let transcript = Transcript::new();
        let siphon: SharedPump = Rc::new(RefCell::new(Thermosiphon::new(&rig(
            true,
            transcript.clone(),
        ))));

        let mut logged = LoggingPump::new(siphon, transcript.clone());
        logged.pump();

        assert_eq!(
            transcript.borrow().lines(),
            ["[pump] starting", "=> => pumping => =>", "[pump] finished"]
        );
    }

    #[test]
    fn logging_pump_wraps_a_gated_noop_too() {
        let transcript = Transcript::new();
        let siphon: SharedPump = Rc::new(RefCell::new(Thermosiphon::new(&rig(
            false,
            transcript.clone(),
        ))));

        let mut logged = LoggingPump::new(siphon, transcript.clone());
        logged.pump();

        assert_eq!(
            transcript.borrow().lines(),
            ["[pump] starting", "[pump] finished"]
        );
    }
}
