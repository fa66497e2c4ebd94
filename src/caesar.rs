use crate::fit::score_text;

/// Number of letters in the latin alphabet
const ALPHABET_LEN: u8 = 26;

/// Reduce any shift into the range 0..26
/// ```
/// use caesar::caesar::normalize_shift;
/// assert_eq!(normalize_shift(29), 3);
/// assert_eq!(normalize_shift(-72), 6);
/// ```
pub fn normalize_shift(shift: i32) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i32) as u8
}

/// Shift a single ASCII letter by an already normalized amount, keeping its case
fn shift_char(c: char, shift: u8) -> char {
    let base = match c {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return c,
    };

    ((c as u8 - base + shift) % ALPHABET_LEN + base) as char
}

/// Shift every letter in the text by `shift` places, wrapping around the alphabet.
/// Anything that isn't an ASCII letter is left untouched.
/// ```
/// use caesar::caesar::caesar_shift;
/// assert_eq!(caesar_shift("Attack at dawn", 3), "Dwwdfn dw gdzq");
/// assert_eq!(caesar_shift("Dwwdfn dw gdzq", -3), "Attack at dawn");
/// ```
pub fn caesar_shift(text: impl AsRef<str>, shift: i32) -> String {
    let text = text.as_ref();
    let mut out = String::with_capacity(text.len());
    caesar_shift_into(text, shift, &mut out);
    out
}

/// Shift the text into an output buffer, replacing whatever the buffer held before
/// ```
/// use caesar::caesar::caesar_shift_into;
/// let mut out = String::from("old contents");
/// caesar_shift_into("abc xyz", 1, &mut out);
/// assert_eq!(out, "bcd yza");
/// ```
pub fn caesar_shift_into(text: impl AsRef<str>, shift: i32, out: &mut String) {
    let shift = normalize_shift(shift);
    out.clear();
    out.extend(text.as_ref().chars().map(|c| shift_char(c, shift)));
}

/// Undo a shift of `shift` places.
///
/// Equivalent to `caesar_shift(text, -shift)` but never negates, so every `i32` is valid.
/// ```
/// use caesar::caesar::{caesar_shift, caesar_unshift};
/// let enc = caesar_shift("Hello, World!", i32::MIN);
/// assert_eq!(caesar_unshift(enc, i32::MIN), "Hello, World!");
/// ```
pub fn caesar_unshift(text: impl AsRef<str>, shift: i32) -> String {
    let inverse = (ALPHABET_LEN - normalize_shift(shift)) % ALPHABET_LEN;
    caesar_shift(text, inverse as i32)
}

/// The best decryption found when breaking a caesar cipher
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// shift which was applied to the ciphertext to produce `text`
    pub shift: u8,
    /// english score of `text`, see [`score_text`]
    pub score: f64,
    pub text: String,
}

impl Candidate {
    /// The shift that was originally used to encrypt the text
    pub fn encryption_shift(&self) -> u8 {
        (ALPHABET_LEN - self.shift) % ALPHABET_LEN
    }
}

/// Break a caesar cipher by trying all 26 shifts and keeping the most english looking one.
///
/// Ties go to the lowest shift. If no shift scores above the unshifted text,
/// e.g. for text with no letters in it, the text is returned unchanged with a shift of 0.
/// Short inputs don't carry enough letters for the frequencies to mean much,
/// so expect wrong answers there.
pub fn break_caesar(text: impl AsRef<str>) -> Candidate {
    let text = text.as_ref();
    let mut best = Candidate {
        shift: 0,
        score: score_text(text),
        text: text.to_owned(),
    };

    let mut shifted = String::with_capacity(text.len());
    for shift in 1..ALPHABET_LEN {
        caesar_shift_into(text, shift as i32, &mut shifted);
        let score = score_text(&shifted);
        if score > best.score {
            best.shift = shift;
            best.score = score;
            best.text.clone_from(&shifted);
        }
    }

    best
}

/// Break a caesar cipher, returning only the recovered plaintext
pub fn brute_force_decode(text: impl AsRef<str>) -> String {
    break_caesar(text).text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shift() {
        assert_eq!(normalize_shift(0), 0);
        assert_eq!(normalize_shift(26), 0);
        assert_eq!(normalize_shift(-1), 25);
        assert_eq!(normalize_shift(-26), 0);
        assert_eq!(normalize_shift(i32::MAX), (i32::MAX % 26) as u8);
        assert_eq!(normalize_shift(i32::MIN), 2);
    }

    #[test]
    fn test_shift_wraps() {
        assert_eq!(caesar_shift("xyz XYZ", 3), "abc ABC");
        assert_eq!(caesar_shift("abc ABC", -3), "xyz XYZ");
    }

    #[test]
    fn test_negative_shift() {
        assert_eq!(caesar_shift("This is a test", -72), "Znoy oy g zkyz");
    }

    #[test]
    fn test_non_letters_untouched() {
        let text = "0123456789 !?.,;:'\"\t\nçÉ ßπ 日本";
        assert_eq!(caesar_shift(text, 11), text);
    }

    #[test]
    fn test_identity_shifts() {
        let text = "The Quick Brown Fox, 42 times!";
        assert_eq!(caesar_shift(text, 0), text);
        assert_eq!(caesar_shift(text, 26), text);
        assert_eq!(caesar_shift(text, -26), text);
    }

    #[test]
    fn test_unshift() {
        assert_eq!(caesar_unshift("Khoor, Zruog!", 3), "Hello, World!");
        assert_eq!(caesar_unshift("Khoor, Zruog!", 29), "Hello, World!");
        assert_eq!(caesar_unshift("Hello", 0), "Hello");
    }

    #[test]
    fn test_break_caesar_reports_shift() {
        let plain = "it was the best of times, it was the worst of times";
        let enc = caesar_shift(plain, 7);
        let candidate = break_caesar(&enc);
        assert_eq!(candidate.text, plain);
        assert_eq!(candidate.shift, 19);
        assert_eq!(candidate.encryption_shift(), 7);
        assert_eq!(candidate.score, score_text(plain));
    }

    #[test]
    fn test_break_caesar_plaintext_keeps_shift_zero() {
        let plain = "nothing to see here, just some ordinary english";
        let candidate = break_caesar(plain);
        assert_eq!(candidate.shift, 0);
        assert_eq!(candidate.encryption_shift(), 0);
        assert_eq!(candidate.text, plain);
    }

    #[test]
    fn test_break_caesar_without_letters() {
        // nothing scores above zero, so the input comes back untouched instead of as ""
        assert_eq!(brute_force_decode(""), "");
        assert_eq!(brute_force_decode("123 !?"), "123 !?");

        let candidate = break_caesar("123 !?");
        assert_eq!(candidate.shift, 0);
        assert_eq!(candidate.score, 0.0);
    }
}
