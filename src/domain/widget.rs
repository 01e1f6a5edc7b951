#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetDescriptor {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub supported_families: &'static [&'static str],
}

pub const PROCHAIN_TRAIN: WidgetDescriptor = WidgetDescriptor {
    kind: "ProchainTrain",
    display_name: "Prochain Voyage",
    description: "Affiche le nombre de jours avant votre prochain départ.",
    supported_families: &["systemSmall", "accessoryCircular"],
};
