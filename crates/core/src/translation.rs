//! Japanese to English card-name dictionary.
//!
//! The dictionary is plain data: an ordered list of `(japanese, english)`
//! pairs. Substring matching walks the entries in definition order, so the
//! order of a loaded dictionary file matters.

use indexmap::IndexMap;

use crate::error::CoreError;

/// Bundled dictionary, in lookup order.
const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // Basic lands
    ("平地", "Plains"),
    ("島", "Island"),
    ("沼", "Swamp"),
    ("山", "Mountain"),
    ("森", "Forest"),
    // Staples
    ("稲妻", "Lightning Bolt"),
    ("電光", "Lightning Bolt"),
    ("ライトニング・ボルト", "Lightning Bolt"),
    ("暗黒の儀式", "Dark Ritual"),
    ("ダーク・リチュアル", "Dark Ritual"),
    ("巨大化", "Giant Growth"),
    ("ジャイアント・グロウス", "Giant Growth"),
    ("対抗呪文", "Counterspell"),
    ("カウンタースペル", "Counterspell"),
    ("剣を鍬に", "Swords to Plowshares"),
    ("ソーズ・トゥ・プラウシェアーズ", "Swords to Plowshares"),
    // Power 9
    ("ブラック・ロータス", "Black Lotus"),
    ("黒蓮", "Black Lotus"),
    ("タイムウォーク", "Time Walk"),
    ("時間歩き", "Time Walk"),
    ("アンセストラル・リコール", "Ancestral Recall"),
    ("先祖の記憶", "Ancestral Recall"),
    ("モックス・サファイア", "Mox Sapphire"),
    ("モックス・ジェット", "Mox Jet"),
    ("モックス・ルビー", "Mox Ruby"),
    ("モックス・パール", "Mox Pearl"),
    ("モックス・エメラルド", "Mox Emerald"),
    ("ライブラリー・オブ・アレクサンドリア", "Library of Alexandria"),
    ("アレクサンドリア図書館", "Library of Alexandria"),
    ("タイムトゥイスター", "Timetwister"),
    ("時のらせん", "Timetwister"),
    // Creatures
    ("ターモゴイフ", "Tarmogoyf"),
    ("タルモゴイフ", "Tarmogoyf"),
    ("瞬唱の魔道士スナップキャスター・メイジ", "Snapcaster Mage"),
    ("スナップキャスター・メイジ", "Snapcaster Mage"),
    ("デルバー・オブ・シークレッツ", "Delver of Secrets"),
    ("秘密を掘り下げる者", "Delver of Secrets"),
    ("若き紅蓮術士", "Young Pyromancer"),
    ("ヤング・パイロマンサー", "Young Pyromancer"),
    // Planeswalkers
    ("ジェイス・ザ・マインド・スカルプター", "Jace, the Mind Sculptor"),
    ("精神を刻む者、ジェイス", "Jace, the Mind Sculptor"),
    ("リリアナ・オブ・ザ・ヴェール", "Liliana of the Veil"),
    ("ヴェールのリリアナ", "Liliana of the Veil"),
    ("チャンドラ・ナラー", "Chandra Nalaar"),
    ("ガラク・ワイルドスピーカー", "Garruk Wildspeaker"),
    // Spells
    ("精神的つまづき", "Mental Misstep"),
    ("メンタル・ミスステップ", "Mental Misstep"),
    ("思考囲い", "Thoughtseize"),
    ("ソートサイズ", "Thoughtseize"),
    ("思考停止", "Thoughtseize"),
    ("パス・トゥ・エグザイル", "Path to Exile"),
    ("流刑への道", "Path to Exile"),
    ("フォース・オブ・ウィル", "Force of Will"),
    ("意志の力", "Force of Will"),
    // Artifacts
    ("ソル・リング", "Sol Ring"),
    ("太陽の指輪", "Sol Ring"),
    ("マナ・クリプト", "Mana Crypt"),
    ("マナの墓所", "Mana Crypt"),
    ("スカルクランプ", "Skullclamp"),
    ("頭蓋骨絞め", "Skullclamp"),
    ("センギアの自動機械", "Sensei's Divining Top"),
    ("師範の占い独楽", "Sensei's Divining Top"),
    // Lands
    ("フェッチランド", "Fetch Land"),
    ("ショックランド", "Shock Land"),
    ("デュアルランド", "Dual Land"),
    ("ウェイストランド", "Wasteland"),
    ("不毛の大地", "Wasteland"),
    ("ストリップマイン", "Strip Mine"),
    ("露天鉱床", "Strip Mine"),
    // Card types
    ("クリーチャー", "Creature"),
    ("インスタント", "Instant"),
    ("ソーサリー", "Sorcery"),
    ("エンチャント", "Enchantment"),
    ("アーティファクト", "Artifact"),
    ("プレインズウォーカー", "Planeswalker"),
    ("土地", "Land"),
];

/// Whether `c` is Hiragana, Katakana or a CJK Unified Ideograph.
fn is_japanese_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{4E00}'..='\u{9FAF}')
}

/// Whether `text` contains at least one Japanese character.
pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

/// Immutable Japanese to English card-name lookup table.
#[derive(Debug, Clone, Default)]
pub struct TranslationDictionary {
    entries: Vec<(String, String)>,
}

impl TranslationDictionary {
    /// Build a dictionary from ordered pairs. Later duplicates of a key are
    /// dropped so exact lookups stay unambiguous.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: IndexMap<String, String> = IndexMap::new();
        for (ja, en) in pairs {
            map.entry(ja.into()).or_insert_with(|| en.into());
        }
        Self {
            entries: map.into_iter().collect(),
        }
    }

    /// The dictionary bundled with the application.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ENTRIES.iter().copied())
    }

    /// Parse a JSON object of `{"japanese": "english", ...}`. Key order in
    /// the document becomes lookup order.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let map: IndexMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid translation dictionary: {e}")))?;
        Ok(Self::from_pairs(map))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a Japanese card name.
    ///
    /// Tries an exact key match first, then returns the value of the first
    /// entry whose key occurs anywhere inside `text`.
    pub fn translate(&self, text: &str) -> Option<&str> {
        if let Some((_, en)) = self.entries.iter().find(|(ja, _)| ja == text) {
            return Some(en);
        }

        self.entries
            .iter()
            .find(|(ja, _)| !ja.is_empty() && text.contains(ja.as_str()))
            .map(|(_, en)| en.as_str())
    }
}
