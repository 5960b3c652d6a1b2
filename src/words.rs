//! The two word pools behind generated names.
//!
//! Adjectives pair with surnames of famous scientists and engineers to form
//! names like `happy_turing`. Both pools are ordered, duplicate-free, and
//! lowercase ASCII; a candidate name is fully identified by its
//! (adjective index, surname index) pair.

pub const ADJECTIVES: &[&str] = &[
    "admiring", "adoring", "agitated", "amazing", "angry",
    "awesome", "backstabbing", "berserk", "big", "boring",
    "clever", "cocky", "compassionate", "condescending", "cranky",
    "desperate", "determined", "distracted", "dreamy", "drunk",
    "ecstatic", "elated", "elegant", "evil", "fervent",
    "focused", "furious", "gigantic", "gloomy", "goofy",
    "grave", "happy", "high", "hopeful", "hungry",
    "insane", "jolly", "jovial", "kickass", "lonely",
    "loving", "mad", "modest", "naughty", "nauseous",
    "nostalgic", "pedantic", "pensive", "prickly", "reverent",
    "romantic", "sad", "serene", "sharp", "sick",
    "silly", "sleepy", "small", "stoic", "stupefied",
    "suspicious", "tender", "thirsty", "tiny", "trusting",
    "awake", "abstract", "abstaining", "good", "cheeky",
    "exuberant", "thick", "thin",
];

pub const SURNAMES: &[&str] = &[
    "allen", "almeida", "archimedes", "austin", "bobby",
    "baltic", "bell", "blackwell", "bohr", "booth",
    "borg", "bose", "brown", "carson", "cindy",
    "cori", "cray", "curie", "darwin", "davinci",
    "dijkstra", "dubinsky", "easley", "einstein", "engelbart",
    "euclid", "euler", "fermat", "fermi", "franklin",
    "galileo", "gates", "goldberg", "goldstine", "goldwasser",
    "golick", "goodall", "hamilton", "hawking", "heisenberg",
    "heyrovsky", "hodgkin", "hoover", "hopper", "hugle",
    "hypatia", "jang", "jennings", "jepsen", "joliot",
    "jones", "kalam", "kare", "keller", "kinsey",
    "khorana", "kilby", "kirch", "knuth", "kowalevski",
    "lamar", "leakey", "leavitt", "lichterman", "liskov",
    "lovelace", "lumiere", "mahavira", "mayer", "mccarthy",
    "mcclintock", "mclean", "mkenzie", "meitner", "meninsky",
    "mestorf", "morse", "murdock", "newton", "nobel",
    "noether", "northcutt", "noyce", "panini", "pare",
    "pasteur", "payne", "perlman", "pike", "poincare",
    "poitras", "ptolemy", "raman", "ramanujan", "ride",
    "ritchie", "roentgen", "rosalind", "saha", "sammet",
    "schwartz", "shaw", "shirley", "shockley", "sinoussi",
    "snyder", "spence", "stallman", "stonebraker", "swanson",
    "swartz", "swirles", "tesla", "thompson", "torvalds",
    "turing", "varahamihira", "visvesvaraya", "volhard", "wescoff",
    "williams", "wilson", "wing", "wozniak", "wright",
    "zed",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_well_formed(pool: &[&str]) {
        assert!(!pool.is_empty());
        let unique: HashSet<&&str> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len(), "pool contains duplicates");
        for word in pool {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "not lowercase ascii letters: {}",
                word
            );
        }
    }

    #[test]
    fn adjectives_are_well_formed() {
        assert_well_formed(ADJECTIVES);
    }

    #[test]
    fn surnames_are_well_formed() {
        assert_well_formed(SURNAMES);
    }

    #[test]
    fn word_list_sizes() {
        assert_eq!(ADJECTIVES.len(), 73);
        assert_eq!(SURNAMES.len(), 126);
    }
}
