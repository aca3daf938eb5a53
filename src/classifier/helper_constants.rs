pub const PLUS_SIGN: &'static str = "+";
// Full-width variant of the plus sign, treated as `+`.
pub const FULL_WIDTH_PLUS: char = '\u{FF0B}';

// Anything that is neither an ASCII digit nor a plus sign is noise. Runs
// after non-ASCII decimals have been folded to ASCII.
pub const NOISE_PATTERN: &'static str = r"[^0-9+]";

// An optional leading plus followed only by ASCII digits.
pub const NORMALIZED_PATTERN: &'static str = r"^\+?[0-9]*$";

pub const INVALID_NUMBER_HEADER: &'static str = "Invalid Algerian phone number: ";
pub const VALID_NUMBER_HEADER: &'static str = "Algerian Phone Number: ";
