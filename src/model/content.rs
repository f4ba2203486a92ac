use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMethod {
    #[serde(default)]
    pub resources_name: String,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

// As chaves são ids de sequência com zero à esquerda ("01", "02", ...),
// então a ordem do BTreeMap coincide com a ordem atribuída pelo chamador.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TranslationContent {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub resources: BTreeMap<String, ResourceMethod>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslateRequest {
    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub content: TranslationContent,
}

// Alvo leniente para payloads candidatos: só a descrição interessa.
// O resto da estrutura vem sempre do conteúdo original.
#[derive(Debug, Deserialize, Default)]
pub struct ParsedContent {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub resources: BTreeMap<String, ParsedResource>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ParsedResource {
    #[serde(default)]
    pub description: String,
}
