use std::collections::BTreeMap;

use tracing::debug;

use crate::model::content::{ParsedContent, ResourceMethod, TranslationContent};
use crate::parsers::freeform;
use crate::services::repair;

// Normaliza a resposta livre do serviço de tradução de volta para a
// estrutura original. Nunca falha: cada estratégia que não reconhece o
// texto cai para a próxima, e no pior caso o conteúdo original volta
// intacto para a página continuar renderizando.
pub fn normalize(original: &TranslationContent, raw: &str) -> TranslationContent {
    let mut working = raw.trim().to_string();

    // 1) Bloco cercado de markdown com JSON dentro
    if let Some(inner) = freeform::fenced_block(&working) {
        let repaired = repair::fix_key_spacing(&inner);
        if let Ok(parsed) = serde_json::from_str::<ParsedContent>(&repaired) {
            debug!(strategy = "fenced_block", "translation normalized");
            return merge(original, &parsed);
        }
        // O bloco não era JSON: segue o resto da cascata sobre o texto extraído
        working = inner;
    }

    // 2) Formatos etiquetados Content:/language=/Content=
    if let Some(payload) = freeform::tagged_payload(&working) {
        let repaired = repair::repair_payload(&payload);
        if let Ok(parsed) = serde_json::from_str::<ParsedContent>(&repaired) {
            debug!(strategy = "tagged_payload", "translation normalized");
            return merge(original, &parsed);
        }
    }

    // 3) JSON direto, possivelmente embrulhado numa camada de aspas
    let stripped = repair::strip_outer_quotes(&working).to_string();
    working = stripped;

    let direct = repair::fix_key_spacing(&working);
    if let Ok(parsed) = serde_json::from_str::<ParsedContent>(&direct) {
        debug!(strategy = "direct_json", "translation normalized");
        return merge(original, &parsed);
    }

    // 4) Frase solta com a tradução entre aspas, só quando há um único recurso
    if original.resources.len() == 1 {
        if let Some(text) = freeform::quoted_translation(&working) {
            debug!(strategy = "quoted_sentence", "translation normalized");
            let mut out = original.clone();
            if let Some(entry) = out.resources.values_mut().next() {
                entry.description = text;
            }
            return out;
        }
    }

    // 5) Bullets **rótulo**: texto, atribuídos aos recursos por posição
    let bullets = freeform::bullet_texts(&working);
    if !bullets.is_empty() {
        debug!(
            strategy = "bullets",
            count = bullets.len(),
            "translation normalized"
        );
        let mut out = original.clone();
        for (entry, text) in out.resources.values_mut().zip(bullets) {
            entry.description = text;
        }
        return out;
    }

    // 6) String curta sem markdown vira a descrição principal
    if !working.is_empty() && working.chars().count() < 100 && !working.contains("**") {
        debug!(strategy = "short_string", "translation normalized");
        let mut out = original.clone();
        out.description = working;
        return out;
    }

    // 7) Nada reconhecível: devolve o original
    debug!(strategy = "identity", "translation not recognized");
    original.clone()
}

// Itera as chaves originais, na ordem original: nenhuma chave é
// inventada nem descartada, e resourceId vem sempre da entrada original,
// porque o upstream não o ecoa de forma confiável.
fn merge(original: &TranslationContent, parsed: &ParsedContent) -> TranslationContent {
    let description = if parsed.description.is_empty() {
        original.description.clone()
    } else {
        parsed.description.clone()
    };

    let resources: BTreeMap<String, ResourceMethod> = original
        .resources
        .iter()
        .map(|(key, entry)| {
            let mut merged = entry.clone();
            if let Some(translated) = parsed.resources.get(key) {
                if !translated.description.is_empty() {
                    merged.description = translated.description.clone();
                }
            }
            (key.clone(), merged)
        })
        .collect();

    TranslationContent {
        description,
        resources,
    }
}
