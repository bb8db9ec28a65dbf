//! Variables command: list what parameters can be bound to.

use practice_core::config::PracticeConfig;
use practice_core::variables::variable_options;

pub fn run_variables(cfg: &PracticeConfig) {
    for group in variable_options(cfg, &[]) {
        println!("{}:", group.label);
        for option in group.options {
            println!("  {:<20} {}", option.name, option.label);
        }
    }
}
