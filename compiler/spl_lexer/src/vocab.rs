//! The closed word lists of SPL.
//!
//! Every list holds lowercase phrases; multi-word entries ("summer's day",
//! "lady capulet") are space-separated and matched word by word. Lookups are
//! case-insensitive.

pub const POSITIVE_NOUNS: &[&str] = &[
    "heaven",
    "king",
    "lord",
    "angel",
    "flower",
    "happiness",
    "joy",
    "plum",
    "summer's day",
    "hero",
    "rose",
    "kingdom",
    "pony",
];

pub const NEUTRAL_NOUNS: &[&str] = &[
    "animal",
    "aunt",
    "brother",
    "cat",
    "chihuahua",
    "cousin",
    "cow",
    "daughter",
    "door",
    "face",
    "father",
    "fellow",
    "granddaughter",
    "grandfather",
    "grandmother",
    "grandson",
    "hair",
    "hamster",
    "horse",
    "lamp",
    "lantern",
    "mistletoe",
    "moon",
    "morning",
    "mother",
    "nephew",
    "niece",
    "nose",
    "purse",
    "road",
    "roman",
    "sister",
    "sky",
    "son",
    "squirrel",
    "stone wall",
    "sun",
    "thing",
    "town",
    "tree",
    "uncle",
    "wind",
];

pub const NEGATIVE_NOUNS: &[&str] = &[
    "hell",
    "microsoft",
    "bastard",
    "beggar",
    "blister",
    "codpiece",
    "coward",
    "curse",
    "death",
    "devil",
    "draught",
    "famine",
    "flirt-gill",
    "goat",
    "hate",
    "hog",
    "hound",
    "leech",
    "lie",
    "pig",
    "plague",
    "starvation",
    "toad",
    "war",
    "wolf",
];

pub const POSITIVE_ADJECTIVES: &[&str] = &[
    "amazing",
    "beautiful",
    "blossoming",
    "bold",
    "brave",
    "charming",
    "clearest",
    "cunning",
    "cute",
    "delicious",
    "embroidered",
    "fair",
    "fine",
    "gentle",
    "golden",
    "good",
    "handsome",
    "happy",
    "healthy",
    "honest",
    "lovely",
    "loving",
    "mighty",
    "noble",
    "peaceful",
    "pretty",
    "prompt",
    "proud",
    "reddest",
    "rich",
    "smooth",
    "sunny",
    "sweet",
    "sweetest",
    "trustworthy",
    "warm",
];

pub const NEUTRAL_ADJECTIVES: &[&str] = &[
    "big", "black", "blue", "bluest", "bottomless", "furry", "green", "hard", "huge", "large",
    "little", "normal", "old", "purple", "red", "rural", "small", "tiny", "white", "yellow",
];

pub const NEGATIVE_ADJECTIVES: &[&str] = &[
    "bad",
    "cowardly",
    "cursed",
    "damned",
    "dirty",
    "disgusting",
    "distasteful",
    "dusty",
    "evil",
    "fat",
    "fat-kidneyed",
    "fatherless",
    "foul",
    "hairy",
    "half-witted",
    "horrible",
    "horrid",
    "infected",
    "lying",
    "miserable",
    "misused",
    "oozing",
    "rotten",
    "smelly",
    "snotty",
    "sorry",
    "stinking",
    "stuffed",
    "stupid",
    "vile",
    "villainous",
    "worried",
];

/// Comparatives meaning "greater than" when followed by `than`.
pub const POSITIVE_COMPARATIVES: &[&str] =
    &["better", "bigger", "fresher", "friendlier", "nicer", "jollier"];

/// Comparatives meaning "less than" when followed by `than`.
pub const NEGATIVE_COMPARATIVES: &[&str] = &["punier", "smaller", "worse"];

pub const FIRST_PERSON: &[&str] = &["i", "me", "myself"];

pub const SECOND_PERSON: &[&str] = &["you", "thee", "thou", "yourself", "thyself"];

/// Pronouns that open an assignment (`You are ...`, `Thou art ...`).
pub const SECOND_PERSON_SUBJECTS: &[&str] = &["you", "thou", "thee", "ye"];

pub const POSSESSIVES: &[&str] = &[
    "my", "mine", "your", "thy", "thine", "his", "her", "its", "our", "their",
];

pub const ARTICLES: &[&str] = &["a", "an", "the"];

pub const BE: &[&str] = &["am", "are", "art", "be", "is"];

/// Every name a dramatis persona may use.
pub const CHARACTERS: &[&str] = &[
    "achilles",
    "adonis",
    "adriana",
    "aegeon",
    "aemilia",
    "agamemnon",
    "agrippa",
    "ajax",
    "alonso",
    "andromache",
    "angelo",
    "antiochus",
    "antonio",
    "arthur",
    "autolycus",
    "balthazar",
    "banquo",
    "beatrice",
    "benedick",
    "benvolio",
    "bianca",
    "brabantio",
    "brutus",
    "capulet",
    "cassandra",
    "cassius",
    "christopher sly",
    "cicero",
    "claudio",
    "claudius",
    "cleopatra",
    "cordelia",
    "cornelius",
    "cressida",
    "cymberline",
    "demetrius",
    "desdemona",
    "dionyza",
    "doctor caius",
    "dogberry",
    "don john",
    "don pedro",
    "donalbain",
    "dorcas",
    "duncan",
    "egeus",
    "emilia",
    "escalus",
    "falstaff",
    "fenton",
    "ferdinand",
    "ford",
    "fortinbras",
    "francisca",
    "friar john",
    "friar laurence",
    "gertrude",
    "goneril",
    "hamlet",
    "hecate",
    "hector",
    "helen",
    "helena",
    "hermia",
    "hermonie",
    "hippolyta",
    "horatio",
    "imogen",
    "isabella",
    "john of gaunt",
    "john of lancaster",
    "julia",
    "juliet",
    "julius caesar",
    "king henry",
    "king john",
    "king lear",
    "king richard",
    "lady capulet",
    "lady macbeth",
    "lady macduff",
    "lady montague",
    "lennox",
    "leonato",
    "luciana",
    "lucio",
    "lychorida",
    "lysander",
    "macbeth",
    "macduff",
    "malcolm",
    "mariana",
    "mark antony",
    "mercutio",
    "miranda",
    "mistress ford",
    "mistress overdone",
    "mistress page",
    "montague",
    "mopsa",
    "oberon",
    "octavia",
    "octavius caesar",
    "olivia",
    "ophelia",
    "orlando",
    "orsino",
    "othello",
    "page",
    "pantino",
    "paris",
    "pericles",
    "pinch",
    "polonius",
    "pompeius",
    "portia",
    "priam",
    "prince florizel",
    "prince henry",
    "prospero",
    "proteus",
    "publius",
    "puck",
    "queen elinor",
    "regan",
    "robin",
    "romeo",
    "rosalind",
    "sebastian",
    "shallow",
    "shylock",
    "slender",
    "solinus",
    "stephano",
    "thaisa",
    "the abbot of westminster",
    "the apothecary",
    "the archbishop of canterbury",
    "the duke of milan",
    "the duke of venice",
    "the ghost",
    "theseus",
    "thurio",
    "timon",
    "titania",
    "titus",
    "troilus",
    "tybalt",
    "ulysses",
    "valentine",
    "venus",
    "vincentio",
    "viola",
];

/// Whether `word` is a single-word entry of `list`.
pub fn contains(list: &[&str], word: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(word))
}

/// Length in words of the longest entry of `list` that `words` starts with.
///
/// `words` is the upcoming run of words in source order.
pub fn longest_match<'w>(list: &[&str], words: impl Fn(usize) -> Option<&'w str>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for entry in list {
        let mut len = 0;
        let matched = entry.split(' ').all(|part| {
            let ok = words(len).is_some_and(|w| w.eq_ignore_ascii_case(part));
            len += 1;
            ok
        });
        if matched && best.map_or(true, |b| len > b) {
            best = Some(len);
        }
    }
    best
}

pub fn is_adjective(word: &str) -> bool {
    contains(POSITIVE_ADJECTIVES, word)
        || contains(NEUTRAL_ADJECTIVES, word)
        || contains(NEGATIVE_ADJECTIVES, word)
}
