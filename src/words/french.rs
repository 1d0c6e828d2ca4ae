use super::CardinalSpeller;

const UNITS: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize",
];

const TENS: [&str; 7] = [
    "", "dix", "vingt", "trente", "quarante", "cinquante", "soixante",
];

/// Scales above `mille`, largest first: (value, singular, plural).
const SCALES: [(u64, &str, &str); 3] = [
    (1_000_000_000_000, "billion", "billions"),
    (1_000_000_000, "milliard", "milliards"),
    (1_000_000, "million", "millions"),
];

/// French cardinal numbers, traditional spelling (spaces between groups,
/// hyphens below one hundred).
///
/// `cent` and `quatre-vingt` take their plural `s` only when they end the
/// number or precede a noun scale (`million`…), never before `mille`.
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl CardinalSpeller for French {
    fn spell(&self, n: u64) -> String {
        if n == 0 {
            return UNITS[0].to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        let mut rest = n;

        for (scale, singular, plural) in SCALES {
            let count = rest / scale;
            rest %= scale;
            if count > 0 {
                let noun = if count == 1 { singular } else { plural };
                parts.push(format!("{} {noun}", self.spell(count)));
            }
        }

        let thousands = rest / 1000;
        rest %= 1000;
        match thousands {
            0 => {}
            1 => parts.push("mille".to_string()),
            t => parts.push(format!("{} mille", below_thousand(t, false))),
        }

        if rest > 0 {
            parts.push(below_thousand(rest, true));
        }

        parts.join(" ")
    }

    fn max_value(&self) -> u64 {
        u64::MAX
    }
}

/// Spell `1..=999`. `plural` allows the trailing `s` of `cents` / `quatre-vingts`.
fn below_thousand(n: u64, plural: bool) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let head = match hundreds {
        0 => return below_hundred(rest, plural),
        1 => "cent".to_string(),
        h if rest == 0 && plural => format!("{} cents", UNITS[h as usize]),
        h => format!("{} cent", UNITS[h as usize]),
    };

    if rest == 0 {
        head
    } else {
        format!("{head} {}", below_hundred(rest, plural))
    }
}

/// Spell `1..=99`.
fn below_hundred(n: u64, plural: bool) -> String {
    if n <= 16 {
        return UNITS[n as usize].to_string();
    }
    if n < 20 {
        return format!("dix-{}", UNITS[(n - 10) as usize]);
    }

    let tens = (n / 10) as usize;
    let unit = n % 10;

    match tens {
        2..=6 => match unit {
            0 => TENS[tens].to_string(),
            1 => format!("{} et un", TENS[tens]),
            u => format!("{}-{}", TENS[tens], UNITS[u as usize]),
        },
        // 70..79 count on from soixante: soixante-dix, soixante et onze, ...
        7 if n == 71 => "soixante et onze".to_string(),
        7 => format!("soixante-{}", below_hundred(n - 60, plural)),
        8 if unit == 0 && plural => "quatre-vingts".to_string(),
        8 if unit == 0 => "quatre-vingt".to_string(),
        _ => format!("quatre-vingt-{}", below_hundred(n - 80, plural)),
    }
}
