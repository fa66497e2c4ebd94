/// Relative frequencies of the letters a-z in English text, in order
const ENGLISH_FREQ: [f64; 26] = [
    0.06078062040132936,
    0.010608146612806431,
    0.017582744552198538,
    0.035354605100584496,
    0.09437770751067875,
    0.01708473909557166,
    0.015823965787655516,
    0.04920041756811958,
    0.05167909789148272,
    0.0009001921418521265,
    0.006039104144918327,
    0.02778113983993222,
    0.019204099026178697,
    0.05344165897594949,
    0.05868395439026481,
    0.01259638611939019,
    0.0008396750230721515,
    0.04698649963941883,
    0.04737355704494909,
    0.06816623043910212,
    0.02110282362790041,
    0.006556021201163946,
    0.01782733457393427,
    0.0009115391016233717,
    0.015380173583269034,
    0.0002698054878940547,
];

/// Look up the English frequency of a single letter, ignoring case.
/// Anything outside A-Z / a-z has a frequency of 0.
/// ```
/// use caesar::fit::letter_freq;
/// assert_eq!(letter_freq('E'), letter_freq('e'));
/// assert_eq!(letter_freq('!'), 0.0);
/// ```
pub fn letter_freq(c: char) -> f64 {
    match c.to_ascii_lowercase() {
        l @ 'a'..='z' => ENGLISH_FREQ[(l as u8 - b'a') as usize],
        _ => 0.0,
    }
}

/// Score a given plaintext on how likely it is to be english, higher is better.
///
/// The total is divided by the number of characters in the text, not the number
/// of letters, so punctuation and whitespace drag the score down.
/// The empty string scores 0.
pub fn score_text(text: impl AsRef<str>) -> f64 {
    let text = text.as_ref();
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }

    let total: f64 = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(letter_freq)
        .sum();

    total / len as f64
}
