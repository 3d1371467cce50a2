use serde::Serialize;

/// Stav jednej položky `<option>` vo výbere
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionState {
    pub value: String,
    pub enabled: bool,
    pub selected: bool,
}

/// Stav jedného checkboxu (príznak, stĺpec)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxState {
    pub value: String,
    pub enabled: bool,
    pub checked: bool,
}

/// Viditeľnosť panelu identifikovaného kľúčom
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelState<K> {
    pub panel: K,
    pub visible: bool,
}
