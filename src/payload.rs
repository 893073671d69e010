/// Format the text payload encoded into a QR code.
///
/// The format is `ROLL=<roll>;NAME=<name>`, deterministic for a given pair.
/// Values are embedded verbatim with no escaping, so a value containing `;`
/// or `=` makes the payload ambiguous to a parser. Scanners in this system
/// only display the payload, they do not parse it back.
pub fn format_payload(roll: &str, name: &str) -> String {
    format!("ROLL={};NAME={}", roll, name)
}
