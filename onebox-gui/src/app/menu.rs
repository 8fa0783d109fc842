#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Studio,
    QuickGenerate,
}
