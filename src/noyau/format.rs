// src/noyau/format.rs
//
// Affichage d’un opérande : séparateur de milliers (en-US) sur la partie entière,
// partie décimale recollée telle quelle (jamais groupée, jamais arrondie).

/// Séparateur de milliers (en-US).
const SEPARATEUR: char = ',';

/* ------------------------ Partie entière ------------------------ */

/// Groupe une suite de chiffres par 3 : "1234567" -> "1,234,567".
fn grouper_chiffres(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR);
        }
        out.push(c);
    }
    out
}

/// Partie entière comme un formateur numérique en-US sans décimales :
/// - "" -> "0", zéros de tête retirés ("007" -> "7")
/// - "inf" -> "∞"
/// - tout le reste (NaN, "-" seul, "in" après DEL...) -> "NaN"
fn formater_entier(entier: &str) -> String {
    let (signe, corps) = match entier.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", entier),
    };

    if corps == "inf" {
        return format!("{signe}∞");
    }

    // "-" seul n’est pas un nombre ; "" seul vaut 0
    if corps.is_empty() {
        return if signe.is_empty() { "0".into() } else { "NaN".into() };
    }

    if !corps.bytes().all(|b| b.is_ascii_digit()) {
        return "NaN".into();
    }

    let significatif = corps.trim_start_matches('0');
    let significatif = if significatif.is_empty() { "0" } else { significatif };

    format!("{signe}{}", grouper_chiffres(significatif))
}

/* ------------------------ API ------------------------ */

/// Opérande absent => rien à afficher.
pub fn formater_operande(operande: Option<&str>) -> Option<String> {
    let operande = operande?;

    Some(match operande.split_once('.') {
        None => formater_entier(operande),
        Some((entier, decimale)) => format!("{}.{decimale}", formater_entier(entier)),
    })
}
