// Placement assessment: form parsing, advice rules, and the HTTP handlers
// that tie prediction and resume analysis together.

pub mod advice;
pub mod form;
pub mod handlers;
