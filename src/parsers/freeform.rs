use once_cell::sync::Lazy;
use regex::Regex;

// O serviço de tradução devolve texto livre de formato imprevisível:
// JSON limpo, JSON dentro de bloco cercado, string etiquetada com
// Content:/Content=/language=, prosa, ou lista de bullets.
// Cada função aqui extrai um desses formatos, sem tentar interpretá-lo.

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json|plaintext)?\s*([\s\S]*?)\s*```").unwrap());

static CONTENT_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Content:\s*(\{.*\})").unwrap());

static LANGUAGE_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)language=['"](.+?)['"](?:\s+|\s*,\s*)content=(\{.*\})"#).unwrap()
});

static CONTENT_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Content=(\{.*\})").unwrap());

static QUOTED_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"into Thai is: "([^"]+)""#).unwrap());

static BULLET_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*:\s*([^\n]+)").unwrap());

pub fn fenced_block(text: &str) -> Option<String> {
    FENCED_BLOCK
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

// Ordem fixa: Content: com dois-pontos, depois language=..., content=...,
// depois Content= ancorado no início. O primeiro que casar vence.
pub fn tagged_payload(text: &str) -> Option<String> {
    if let Some(caps) = CONTENT_COLON.captures(text) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = LANGUAGE_CONTENT.captures(text) {
        return Some(caps[2].to_string());
    }
    if let Some(caps) = CONTENT_BARE.captures(text) {
        return Some(caps[1].to_string());
    }
    None
}

pub fn quoted_translation(text: &str) -> Option<String> {
    QUOTED_SENTENCE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

// Devolve só o texto após cada **rótulo**: o rótulo em si é ignorado,
// a atribuição aos recursos é posicional.
pub fn bullet_texts(text: &str) -> Vec<String> {
    BULLET_PAIR
        .captures_iter(text)
        .map(|caps| caps[2].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_block_with_and_without_tag() {
        assert_eq!(
            fenced_block("```json\n{\"a\":1}\n```"),
            Some("{\"a\":1}".to_string())
        );
        assert_eq!(
            fenced_block("```plaintext\nhello\n```"),
            Some("hello".to_string())
        );
        assert_eq!(fenced_block("```\nhello\n```"), Some("hello".to_string()));
        assert_eq!(fenced_block("no fence here"), None);
    }

    #[test]
    fn tagged_payload_forms() {
        assert_eq!(
            tagged_payload("Content: {'description': 'x'}"),
            Some("{'description': 'x'}".to_string())
        );
        assert_eq!(
            tagged_payload("language='Thai', content={\"description\": \"x\"}"),
            Some("{\"description\": \"x\"}".to_string())
        );
        assert_eq!(
            tagged_payload("Content={'description': 'x'}"),
            Some("{'description': 'x'}".to_string())
        );
        assert_eq!(tagged_payload("plain prose"), None);
    }

    #[test]
    fn content_bare_only_at_start() {
        assert_eq!(tagged_payload("see Content={'a': 1}"), None);
    }

    #[test]
    fn quoted_translation_extracts_text() {
        assert_eq!(
            quoted_translation("The translation into Thai is: \"สวัสดี\"."),
            Some("สวัสดี".to_string())
        );
        assert_eq!(quoted_translation("nothing quoted"), None);
    }

    #[test]
    fn bullet_texts_in_order() {
        let raw = "intro\n- **A**: foo\n- **B**: bar\n";
        assert_eq!(bullet_texts(raw), vec!["foo".to_string(), "bar".to_string()]);
    }
}
