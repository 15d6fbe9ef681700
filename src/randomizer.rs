//! Randomization of the eligible controllers.
//!
//! A controller is eligible when it is randomizable, its indicator is active
//! and it is visible. Every eligible controller draws a value from its own
//! widget domain and goes through the ordinary [Controller::set_value] path,
//! so a randomized change is validated, announced and recorded like any other.
use crate::controller::{Controller, Recording};
use crate::error::GuiResult;
use crate::gui::Gui;
use rand::RngCore;

/// What a randomization did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RandomizeReport {
    /// Names of the controllers that were randomized, in registration order.
    pub touched: Vec<String>,
    /// Number of history entries created.
    pub saved: usize,
    /// Eligible controllers whose widget has nothing to randomize.
    pub skipped: Vec<String>,
}

fn is_eligible(c: &Controller<'_>) -> bool {
    c.die_active() == Some(true) && c.is_visible()
}

impl<'a> Gui<'a> {
    /// Names of the controllers a randomization would touch.
    pub fn randomizable_names(&self) -> Vec<&str> {
        self.registry()
            .iter()
            .filter(|c| is_eligible(c))
            .map(Controller::name)
            .collect()
    }

    /// Randomizes every eligible controller.
    ///
    /// Each randomized controller records its own change, so undoing a
    /// randomization steps back one controller at a time.
    /// Use [Gui::randomize_batch] to record a single entry instead.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) -> GuiResult<RandomizeReport> {
        let mut report = RandomizeReport::default();
        let names: Vec<String> = self
            .randomizable_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for name in names {
            match self.registry_mut().expect_mut(&name)?.randomize(rng)? {
                Some(recording) => {
                    if self.record(recording)? {
                        report.saved += 1;
                    }
                    report.touched.push(name);
                }
                None => {
                    tracing::error!(controller = %name, "controller cannot be randomized");
                    report.skipped.push(name);
                }
            }
        }
        Ok(report)
    }

    /// Randomizes every eligible controller as a single history entry.
    pub fn randomize_batch(&mut self, rng: &mut dyn RngCore) -> GuiResult<RandomizeReport> {
        let mut report = {
            let mut gui = self.suspend();
            gui.randomize(rng)?
        };
        report.saved = usize::from(self.record(Recording::Save)?);
        Ok(report)
    }
}
