/// Built-in emoji corpus searched by the emoji mode. Entries keep their
/// curated order; browsing shows them exactly as listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    pub emoji: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const EMOJI_CORPUS: &[EmojiEntry] = &[
    EmojiEntry {
        emoji: "😀",
        name: "grinning face",
        keywords: &["happy", "smile", "grin"],
    },
    EmojiEntry {
        emoji: "😃",
        name: "grinning face with big eyes",
        keywords: &["happy", "joy", "smile"],
    },
    EmojiEntry {
        emoji: "😄",
        name: "grinning face with smiling eyes",
        keywords: &["happy", "joy", "laugh"],
    },
    EmojiEntry {
        emoji: "😁",
        name: "beaming face with smiling eyes",
        keywords: &["happy", "joy", "grin"],
    },
    EmojiEntry {
        emoji: "😆",
        name: "grinning squinting face",
        keywords: &["laugh", "happy", "haha"],
    },
    EmojiEntry {
        emoji: "😅",
        name: "grinning face with sweat",
        keywords: &["laugh", "happy", "sweat"],
    },
    EmojiEntry {
        emoji: "🤣",
        name: "rolling on the floor laughing",
        keywords: &["laugh", "rofl", "lol"],
    },
    EmojiEntry {
        emoji: "😂",
        name: "face with tears of joy",
        keywords: &["laugh", "cry", "joy"],
    },
    EmojiEntry {
        emoji: "🙂",
        name: "slightly smiling face",
        keywords: &["smile", "happy"],
    },
    EmojiEntry {
        emoji: "🙃",
        name: "upside-down face",
        keywords: &["upside", "silly"],
    },
    EmojiEntry {
        emoji: "😉",
        name: "winking face",
        keywords: &["wink", "flirt"],
    },
    EmojiEntry {
        emoji: "😊",
        name: "smiling face with smiling eyes",
        keywords: &["happy", "smile", "joy"],
    },
    EmojiEntry {
        emoji: "😇",
        name: "smiling face with halo",
        keywords: &["angel", "innocent"],
    },
    EmojiEntry {
        emoji: "🥰",
        name: "smiling face with hearts",
        keywords: &["love", "hearts", "adore"],
    },
    EmojiEntry {
        emoji: "😍",
        name: "smiling face with heart-eyes",
        keywords: &["love", "heart", "eyes"],
    },
    EmojiEntry {
        emoji: "🤩",
        name: "star-struck",
        keywords: &["star", "struck", "eyes"],
    },
    EmojiEntry {
        emoji: "😘",
        name: "face blowing a kiss",
        keywords: &["kiss", "love"],
    },
    EmojiEntry {
        emoji: "😗",
        name: "kissing face",
        keywords: &["kiss"],
    },
    EmojiEntry {
        emoji: "😚",
        name: "kissing face with closed eyes",
        keywords: &["kiss"],
    },
    EmojiEntry {
        emoji: "😙",
        name: "kissing face with smiling eyes",
        keywords: &["kiss", "smile"],
    },
    EmojiEntry {
        emoji: "🥲",
        name: "smiling face with tear",
        keywords: &["happy", "cry", "tear"],
    },
    EmojiEntry {
        emoji: "😋",
        name: "face savoring food",
        keywords: &["tongue", "delicious", "yum"],
    },
    EmojiEntry {
        emoji: "😛",
        name: "face with tongue",
        keywords: &["tongue", "silly"],
    },
    EmojiEntry {
        emoji: "😜",
        name: "winking face with tongue",
        keywords: &["wink", "tongue", "silly"],
    },
    EmojiEntry {
        emoji: "🤪",
        name: "zany face",
        keywords: &["crazy", "silly"],
    },
    EmojiEntry {
        emoji: "😝",
        name: "squinting face with tongue",
        keywords: &["tongue", "squint"],
    },
    EmojiEntry {
        emoji: "🤑",
        name: "money-mouth face",
        keywords: &["money", "rich"],
    },
    EmojiEntry {
        emoji: "🤗",
        name: "hugging face",
        keywords: &["hug", "embrace"],
    },
    EmojiEntry {
        emoji: "🤭",
        name: "face with hand over mouth",
        keywords: &["quiet", "secret"],
    },
    EmojiEntry {
        emoji: "🫢",
        name: "face with open eyes and hand over mouth",
        keywords: &["surprise", "quiet"],
    },
    EmojiEntry {
        emoji: "🫣",
        name: "face with peeking eye",
        keywords: &["peek", "shy"],
    },
    EmojiEntry {
        emoji: "🤫",
        name: "shushing face",
        keywords: &["quiet", "shh"],
    },
    EmojiEntry {
        emoji: "🤔",
        name: "thinking face",
        keywords: &["think", "hmm"],
    },
    EmojiEntry {
        emoji: "🫡",
        name: "saluting face",
        keywords: &["salute", "respect"],
    },
    EmojiEntry {
        emoji: "🤐",
        name: "zipper-mouth face",
        keywords: &["quiet", "zip"],
    },
    EmojiEntry {
        emoji: "🤨",
        name: "face with raised eyebrow",
        keywords: &["suspicious", "skeptical"],
    },
    EmojiEntry {
        emoji: "😐",
        name: "neutral face",
        keywords: &["neutral", "meh"],
    },
    EmojiEntry {
        emoji: "😑",
        name: "expressionless face",
        keywords: &["blank", "meh"],
    },
    EmojiEntry {
        emoji: "😶",
        name: "face without mouth",
        keywords: &["quiet", "silent"],
    },
    EmojiEntry {
        emoji: "🫥",
        name: "dotted line face",
        keywords: &["invisible", "depressed"],
    },
    EmojiEntry {
        emoji: "😏",
        name: "smirking face",
        keywords: &["smirk", "smug"],
    },
    EmojiEntry {
        emoji: "😒",
        name: "unamused face",
        keywords: &["meh", "unamused"],
    },
    EmojiEntry {
        emoji: "🙄",
        name: "face with rolling eyes",
        keywords: &["eye", "roll"],
    },
    EmojiEntry {
        emoji: "😬",
        name: "grimacing face",
        keywords: &["grimace", "awkward"],
    },
    EmojiEntry {
        emoji: "😮‍💨",
        name: "face exhaling",
        keywords: &["sigh", "relief"],
    },
    EmojiEntry {
        emoji: "🤥",
        name: "lying face",
        keywords: &["lie", "pinocchio"],
    },
    EmojiEntry {
        emoji: "😔",
        name: "pensive face",
        keywords: &["sad", "pensive"],
    },
    EmojiEntry {
        emoji: "😪",
        name: "sleepy face",
        keywords: &["sleepy", "tired"],
    },
    EmojiEntry {
        emoji: "🤤",
        name: "drooling face",
        keywords: &["drool", "sleep"],
    },
    EmojiEntry {
        emoji: "😴",
        name: "sleeping face",
        keywords: &["sleep", "zzz"],
    },
    EmojiEntry {
        emoji: "₹",
        name: "indian rupee sign",
        keywords: &["rupee", "inr", "currency", "india"],
    },
    EmojiEntry {
        emoji: "$",
        name: "dollar sign",
        keywords: &["dollar", "usd", "currency", "money"],
    },
    EmojiEntry {
        emoji: "€",
        name: "euro sign",
        keywords: &["euro", "eur", "currency"],
    },
    EmojiEntry {
        emoji: "£",
        name: "pound sign",
        keywords: &["pound", "gbp", "currency"],
    },
    EmojiEntry {
        emoji: "¥",
        name: "yen sign",
        keywords: &["yen", "jpy", "currency"],
    },
    EmojiEntry {
        emoji: "₿",
        name: "bitcoin sign",
        keywords: &["bitcoin", "btc", "crypto"],
    },
    EmojiEntry {
        emoji: "©",
        name: "copyright",
        keywords: &["copyright", "legal"],
    },
    EmojiEntry {
        emoji: "®",
        name: "registered",
        keywords: &["registered", "trademark"],
    },
    EmojiEntry {
        emoji: "™",
        name: "trade mark",
        keywords: &["trademark", "tm"],
    },
    EmojiEntry {
        emoji: "°",
        name: "degree sign",
        keywords: &["degree", "temperature"],
    },
    EmojiEntry {
        emoji: "∞",
        name: "infinity",
        keywords: &["infinity", "unlimited"],
    },
    EmojiEntry {
        emoji: "±",
        name: "plus-minus sign",
        keywords: &["plus", "minus", "math"],
    },
    EmojiEntry {
        emoji: "÷",
        name: "division sign",
        keywords: &["division", "divide", "math"],
    },
    EmojiEntry {
        emoji: "×",
        name: "multiplication sign",
        keywords: &["multiply", "times", "math"],
    },
    EmojiEntry {
        emoji: "√",
        name: "square root",
        keywords: &["root", "square", "math"],
    },
    EmojiEntry {
        emoji: "∑",
        name: "n-ary summation",
        keywords: &["sum", "total", "math"],
    },
    EmojiEntry {
        emoji: "∆",
        name: "increment",
        keywords: &["delta", "change", "math"],
    },
    EmojiEntry {
        emoji: "π",
        name: "greek small letter pi",
        keywords: &["pi", "math"],
    },
    EmojiEntry {
        emoji: "α",
        name: "greek small letter alpha",
        keywords: &["alpha", "greek"],
    },
    EmojiEntry {
        emoji: "β",
        name: "greek small letter beta",
        keywords: &["beta", "greek"],
    },
    EmojiEntry {
        emoji: "γ",
        name: "greek small letter gamma",
        keywords: &["gamma", "greek"],
    },
    EmojiEntry {
        emoji: "λ",
        name: "greek small letter lambda",
        keywords: &["lambda", "greek"],
    },
    EmojiEntry {
        emoji: "μ",
        name: "greek small letter mu",
        keywords: &["mu", "micro", "greek"],
    },
    EmojiEntry {
        emoji: "σ",
        name: "greek small letter sigma",
        keywords: &["sigma", "greek"],
    },
    EmojiEntry {
        emoji: "φ",
        name: "greek small letter phi",
        keywords: &["phi", "greek"],
    },
    EmojiEntry {
        emoji: "ω",
        name: "greek small letter omega",
        keywords: &["omega", "greek"],
    },
    EmojiEntry {
        emoji: "¿",
        name: "inverted question mark",
        keywords: &["question", "spanish"],
    },
    EmojiEntry {
        emoji: "¡",
        name: "inverted exclamation mark",
        keywords: &["exclamation", "spanish"],
    },
    EmojiEntry {
        emoji: "§",
        name: "section sign",
        keywords: &["section", "legal"],
    },
    EmojiEntry {
        emoji: "¶",
        name: "pilcrow sign",
        keywords: &["paragraph", "pilcrow"],
    },
    EmojiEntry {
        emoji: "†",
        name: "dagger",
        keywords: &["dagger", "cross"],
    },
    EmojiEntry {
        emoji: "‡",
        name: "double dagger",
        keywords: &["double", "dagger"],
    },
    EmojiEntry {
        emoji: "•",
        name: "bullet",
        keywords: &["bullet", "point"],
    },
    EmojiEntry {
        emoji: "‰",
        name: "per mille sign",
        keywords: &["permille", "thousand"],
    },
    EmojiEntry {
        emoji: "‱",
        name: "per ten thousand sign",
        keywords: &["basis", "point"],
    },
    EmojiEntry {
        emoji: "′",
        name: "prime",
        keywords: &["prime", "minutes"],
    },
    EmojiEntry {
        emoji: "″",
        name: "double prime",
        keywords: &["double", "prime", "seconds"],
    },
    EmojiEntry {
        emoji: "‴",
        name: "triple prime",
        keywords: &["triple", "prime"],
    },
    EmojiEntry {
        emoji: "⁰",
        name: "superscript zero",
        keywords: &["superscript", "zero"],
    },
    EmojiEntry {
        emoji: "¹",
        name: "superscript one",
        keywords: &["superscript", "one"],
    },
    EmojiEntry {
        emoji: "²",
        name: "superscript two",
        keywords: &["superscript", "squared"],
    },
    EmojiEntry {
        emoji: "³",
        name: "superscript three",
        keywords: &["superscript", "cubed"],
    },
    EmojiEntry {
        emoji: "⁴",
        name: "superscript four",
        keywords: &["superscript", "four"],
    },
    EmojiEntry {
        emoji: "⁵",
        name: "superscript five",
        keywords: &["superscript", "five"],
    },
    EmojiEntry {
        emoji: "⁶",
        name: "superscript six",
        keywords: &["superscript", "six"],
    },
    EmojiEntry {
        emoji: "⁷",
        name: "superscript seven",
        keywords: &["superscript", "seven"],
    },
    EmojiEntry {
        emoji: "⁸",
        name: "superscript eight",
        keywords: &["superscript", "eight"],
    },
    EmojiEntry {
        emoji: "⁹",
        name: "superscript nine",
        keywords: &["superscript", "nine"],
    },
    EmojiEntry {
        emoji: "₀",
        name: "subscript zero",
        keywords: &["subscript", "zero"],
    },
    EmojiEntry {
        emoji: "₁",
        name: "subscript one",
        keywords: &["subscript", "one"],
    },
    EmojiEntry {
        emoji: "₂",
        name: "subscript two",
        keywords: &["subscript", "two"],
    },
    EmojiEntry {
        emoji: "₃",
        name: "subscript three",
        keywords: &["subscript", "three"],
    },
    EmojiEntry {
        emoji: "₄",
        name: "subscript four",
        keywords: &["subscript", "four"],
    },
    EmojiEntry {
        emoji: "₅",
        name: "subscript five",
        keywords: &["subscript", "five"],
    },
    EmojiEntry {
        emoji: "₆",
        name: "subscript six",
        keywords: &["subscript", "six"],
    },
    EmojiEntry {
        emoji: "₇",
        name: "subscript seven",
        keywords: &["subscript", "seven"],
    },
    EmojiEntry {
        emoji: "₈",
        name: "subscript eight",
        keywords: &["subscript", "eight"],
    },
    EmojiEntry {
        emoji: "₉",
        name: "subscript nine",
        keywords: &["subscript", "nine"],
    },
    EmojiEntry {
        emoji: "↑",
        name: "up arrow",
        keywords: &["up", "arrow", "north"],
    },
    EmojiEntry {
        emoji: "↓",
        name: "down arrow",
        keywords: &["down", "arrow", "south"],
    },
    EmojiEntry {
        emoji: "←",
        name: "left arrow",
        keywords: &["left", "arrow", "west"],
    },
    EmojiEntry {
        emoji: "→",
        name: "right arrow",
        keywords: &["right", "arrow", "east"],
    },
    EmojiEntry {
        emoji: "↖",
        name: "up-left arrow",
        keywords: &["up", "left", "northwest"],
    },
    EmojiEntry {
        emoji: "↗",
        name: "up-right arrow",
        keywords: &["up", "right", "northeast"],
    },
    EmojiEntry {
        emoji: "↘",
        name: "down-right arrow",
        keywords: &["down", "right", "southeast"],
    },
    EmojiEntry {
        emoji: "↙",
        name: "down-left arrow",
        keywords: &["down", "left", "southwest"],
    },
    EmojiEntry {
        emoji: "↔",
        name: "left-right arrow",
        keywords: &["left", "right", "horizontal"],
    },
    EmojiEntry {
        emoji: "↕",
        name: "up-down arrow",
        keywords: &["up", "down", "vertical"],
    },
    EmojiEntry {
        emoji: "⇄",
        name: "rightwards arrow over leftwards arrow",
        keywords: &["exchange", "swap"],
    },
    EmojiEntry {
        emoji: "⇅",
        name: "upwards arrow leftwards of downwards arrow",
        keywords: &["exchange", "vertical"],
    },
    EmojiEntry {
        emoji: "⇆",
        name: "leftwards arrow over rightwards arrow",
        keywords: &["exchange", "horizontal"],
    },
    EmojiEntry {
        emoji: "⇇",
        name: "leftwards paired arrows",
        keywords: &["left", "double"],
    },
    EmojiEntry {
        emoji: "⇈",
        name: "upwards paired arrows",
        keywords: &["up", "double"],
    },
    EmojiEntry {
        emoji: "⇉",
        name: "rightwards paired arrows",
        keywords: &["right", "double"],
    },
    EmojiEntry {
        emoji: "⇊",
        name: "downwards paired arrows",
        keywords: &["down", "double"],
    },
    EmojiEntry {
        emoji: "⟵",
        name: "long leftwards arrow",
        keywords: &["left", "long"],
    },
    EmojiEntry {
        emoji: "⟶",
        name: "long rightwards arrow",
        keywords: &["right", "long"],
    },
    EmojiEntry {
        emoji: "⟷",
        name: "long left right arrow",
        keywords: &["left", "right", "long"],
    },
    EmojiEntry {
        emoji: "⟸",
        name: "long leftwards double arrow",
        keywords: &["left", "double", "long"],
    },
    EmojiEntry {
        emoji: "⟹",
        name: "long rightwards double arrow",
        keywords: &["right", "double", "long"],
    },
    EmojiEntry {
        emoji: "⟺",
        name: "long left right double arrow",
        keywords: &["left", "right", "double"],
    },
    EmojiEntry {
        emoji: "⚡",
        name: "high voltage",
        keywords: &["lightning", "electric", "power"],
    },
    EmojiEntry {
        emoji: "⭐",
        name: "star",
        keywords: &["star", "favorite"],
    },
    EmojiEntry {
        emoji: "✨",
        name: "sparkles",
        keywords: &["sparkles", "magic"],
    },
    EmojiEntry {
        emoji: "🔥",
        name: "fire",
        keywords: &["fire", "hot", "flame"],
    },
    EmojiEntry {
        emoji: "💎",
        name: "gem stone",
        keywords: &["diamond", "gem", "precious"],
    },
    EmojiEntry {
        emoji: "🎯",
        name: "direct hit",
        keywords: &["target", "bullseye", "goal"],
    },
    EmojiEntry {
        emoji: "🚀",
        name: "rocket",
        keywords: &["rocket", "space", "launch"],
    },
    EmojiEntry {
        emoji: "⚠️",
        name: "warning",
        keywords: &["warning", "caution", "alert"],
    },
    EmojiEntry {
        emoji: "❌",
        name: "cross mark",
        keywords: &["x", "cross", "wrong"],
    },
    EmojiEntry {
        emoji: "✅",
        name: "check mark button",
        keywords: &["check", "correct", "done"],
    },
    EmojiEntry {
        emoji: "❓",
        name: "question mark",
        keywords: &["question", "help"],
    },
    EmojiEntry {
        emoji: "❗",
        name: "exclamation mark",
        keywords: &["exclamation", "alert"],
    },
    EmojiEntry {
        emoji: "💯",
        name: "hundred points",
        keywords: &["hundred", "perfect", "score"],
    },
    EmojiEntry {
        emoji: "🔔",
        name: "bell",
        keywords: &["bell", "notification", "ring"],
    },
    EmojiEntry {
        emoji: "🔕",
        name: "bell with slash",
        keywords: &["bell", "mute", "silent"],
    },
    EmojiEntry {
        emoji: "📌",
        name: "pushpin",
        keywords: &["pin", "location", "mark"],
    },
    EmojiEntry {
        emoji: "📍",
        name: "round pushpin",
        keywords: &["pin", "location", "round"],
    },
    EmojiEntry {
        emoji: "🔗",
        name: "link",
        keywords: &["link", "chain", "url"],
    },
    EmojiEntry {
        emoji: "⚙️",
        name: "gear",
        keywords: &["gear", "settings", "cog"],
    },
    EmojiEntry {
        emoji: "🔧",
        name: "wrench",
        keywords: &["wrench", "tool", "fix"],
    },
    EmojiEntry {
        emoji: "🔨",
        name: "hammer",
        keywords: &["hammer", "tool", "build"],
    },
    EmojiEntry {
        emoji: "⚖️",
        name: "balance scale",
        keywords: &["scale", "justice", "balance"],
    },
    EmojiEntry {
        emoji: "🔒",
        name: "locked",
        keywords: &["lock", "secure", "private"],
    },
    EmojiEntry {
        emoji: "🔓",
        name: "unlocked",
        keywords: &["unlock", "open", "access"],
    },
    EmojiEntry {
        emoji: "🔑",
        name: "key",
        keywords: &["key", "unlock", "access"],
    },
    EmojiEntry {
        emoji: "🎨",
        name: "artist palette",
        keywords: &["art", "paint", "creative"],
    },
    EmojiEntry {
        emoji: "🎭",
        name: "performing arts",
        keywords: &["theater", "drama", "mask"],
    },
    EmojiEntry {
        emoji: "🎪",
        name: "circus tent",
        keywords: &["circus", "tent", "fun"],
    },
    EmojiEntry {
        emoji: "🎲",
        name: "game die",
        keywords: &["dice", "game", "random"],
    },
    EmojiEntry {
        emoji: "🧩",
        name: "puzzle piece",
        keywords: &["puzzle", "piece", "solve"],
    },
    EmojiEntry {
        emoji: "♠️",
        name: "spade suit",
        keywords: &["spade", "cards", "suit"],
    },
    EmojiEntry {
        emoji: "♣️",
        name: "club suit",
        keywords: &["club", "cards", "suit"],
    },
    EmojiEntry {
        emoji: "♥️",
        name: "heart suit",
        keywords: &["heart", "cards", "suit", "love"],
    },
    EmojiEntry {
        emoji: "♦️",
        name: "diamond suit",
        keywords: &["diamond", "cards", "suit"],
    },
];
