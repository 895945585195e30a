// Content-mode transformation: lesson text in, summary or personalized markdown out.
// Validate → resolve credential → one provider call → normalize. Stateless per request.

pub mod handlers;
pub mod prompts;
pub mod relay;
pub mod validation;
