// Book chat relays. Four widget profiles share one pipeline and the same
// in-band failure convention as content transformation.

pub mod handlers;
pub mod profiles;
pub mod prompts;
pub mod relay;
