//! The demo household.
//!
//! A ready-made hub with a plausible set of connected appliances, plus the
//! command script the REPL's `:demo` command walks through.

use hearth_devices::Appliance;

use crate::hub::CommandHub;

/// Commands exercised by the `:demo` REPL command.
///
/// The fifth command is deliberately unaddressed and must not match.
pub const DEMO_SCRIPT: &[&str] = &[
    "Hi Alexa! Turn-on the central AC.",
    "Hi Alexa! Close the kitchen curtains.",
    "Alexa! Turn-on the dish-washer for 1 hour.",
    "Alexa! Turn-off kitchen lights.",
    "Turn-on the garden sprinkler for 20 mins.",
    "Alexa! Feed my dog Ana.",
    "Alexa! Prepare the smoothie for tomorrow morning.",
    "Alexa! Set the alarm for tomorrow 6am.",
];

/// Builds a hub with the demo household connected.
#[must_use]
pub fn demo_hub() -> CommandHub {
    let mut hub = CommandHub::new();
    hub.connect(Appliance::curtains("John's Room Curtains"));
    hub.connect(Appliance::curtains("Kitchen Curtains"));
    hub.connect(Appliance::air_conditioning("Central AC"));
    hub.connect(Appliance::dog_feeder("Dog Sonu"));
    hub.connect(Appliance::dog_feeder("Dog Ana"));
    hub.connect(Appliance::dishwasher("Dish-washer"));
    hub.connect(Appliance::lighting("Living Room Lighting"));
    hub.connect(Appliance::lighting("Kitchen Lights"));
    hub.connect(Appliance::lighting("Backyard Lights"));
    hub.connect(Appliance::sprinkler("Garden Sprinkler"));
    hub.connect(Appliance::blender("Smoothie"));
    hub.connect(Appliance::alarm("Alarm"));
    hub
}
