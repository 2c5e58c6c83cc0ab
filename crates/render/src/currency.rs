/// Format minor units (cents) as US dollars: `140000` → `"$1,400.00"`.
pub fn format_usd(minor_units: u64) -> String {
    let dollars = minor_units / 100;
    let cents = minor_units % 100;
    format!("${}.{cents:02}", group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
