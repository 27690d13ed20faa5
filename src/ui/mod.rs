// src/ui/mod.rs
//
// UI module providing screen-space elements for the interaction props.
//
// Current features:
// - Interaction prompts ("Press E to ...") toggled by the interaction dispatcher

pub mod prompt;
