use once_cell::sync::Lazy;
use regex::Regex;

// O gerador upstream nem sempre emite JSON estritamente válido, mesmo
// quando pretende: sobram espaços dentro de nomes de chave, aspas
// simples, e nomes de campo em tailandês. Cada passe aqui é idempotente.

static KEY_RESOURCES_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*resourcesName\s*":\s*""#).unwrap());

// Variante já observada com o nome partido ao meio
static KEY_RESOURCES_NAME_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*resourcesN\s*Name\s*":\s*""#).unwrap());

static KEY_METHOD: Lazy<Regex> = Lazy::new(|| Regex::new(r#""\s*method\s*":\s*""#).unwrap());

static KEY_DESCRIPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*description\s*":\s*""#).unwrap());

static QUOTED_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r#""\s*([^"]+?)\s*"\s*:"#).unwrap());

static QUOTED_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#":\s*"([^"]+)"(,|\})"#).unwrap());

// Do mais longo para o mais curto: ชื่อทรัพยากร contém ทรัพยากร como
// sufixo e precisa ser substituído antes.
const THAI_FIELD_ALIASES: &[(&str, &str)] = &[
    ("ชื่อทรัพยากร", "resourcesName"),
    ("ทรัพยากร", "resources"),
    ("คำอธิบาย", "description"),
    ("วิธีการ", "method"),
];

// Colapsa espaço perdido dentro dos nomes de chave conhecidos.
pub fn fix_key_spacing(text: &str) -> String {
    let out = KEY_RESOURCES_NAME.replace_all(text, r#""resourcesName":""#);
    let out = KEY_RESOURCES_NAME_SPLIT.replace_all(&out, r#""resourcesName":""#);
    let out = KEY_METHOD.replace_all(&out, r#""method":""#);
    let out = KEY_DESCRIPTION.replace_all(&out, r#""description":""#);
    out.into_owned()
}

// Preparação do payload etiquetado antes do parse JSON: aspas simples
// para duplas, chaves e valores com espaçamento normalizado, nomes de
// campo localizados de volta para o inglês canônico.
pub fn repair_payload(text: &str) -> String {
    let out = text.replace('\'', "\"");
    let out = QUOTED_KEY.replace_all(&out, "\"$1\":");
    let out = QUOTED_VALUE.replace_all(&out, ": \"$1\"$2");
    translate_field_aliases(&out)
}

pub fn translate_field_aliases(text: &str) -> String {
    let mut out = text.to_string();
    for (alias, canonical) in THAI_FIELD_ALIASES {
        out = out.replace(alias, canonical);
    }
    out
}

// Remove uma única camada de aspas envolvendo a string inteira.
pub fn strip_outer_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
