/// Class labels in the order the classifier was trained on. Index `i` of a
/// prediction vector corresponds to `LABELS[i]`.
pub const LABELS: [&str; 36] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F", "G", "H",
    "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

pub fn label_for(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}
