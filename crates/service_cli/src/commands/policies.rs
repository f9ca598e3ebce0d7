//! Policies command implementation
//!
//! Lists the decay policies a definition file may name.

use schedule_core::DecayPolicy;

use crate::Result;

/// Run the policies command
pub fn run() -> Result<()> {
    for name in DecayPolicy::<f64>::NAMES {
        println!("{}", name);
    }
    Ok(())
}
