pub const ACTIVATED_REPLY: &str =
    "Alright, I want to resolve this. What details do you need from me?";
pub const PROBING_REPLY: &str = "Okay, can you explain a bit more?";

/// Picks the outgoing reply for a conversation.
///
/// Once engaged the persona plays along and asks for details; before that it
/// only nudges the sender to keep talking.
pub fn select_reply(active: bool) -> &'static str {
    if active { ACTIVATED_REPLY } else { PROBING_REPLY }
}
