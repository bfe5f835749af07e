use shiftcal_core::{Config, Group, ShiftType};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = Config::load_or_default().resolver();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = Group::ALL
            .into_iter()
            .map(|g| {
                let pattern = resolver
                    .patterns()
                    .get(g)
                    .map(|p| serde_json::Value::String(p.to_code_string()))
                    .unwrap_or(serde_json::Value::Null);
                (g.to_string(), pattern)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("Cycle epoch: {}", resolver.epoch());
    for group in Group::ALL {
        match resolver.patterns().get(group) {
            Some(pattern) => {
                let code = pattern.to_code_string();
                let weeks: Vec<&str> = (0..code.len())
                    .step_by(7)
                    .map(|i| &code[i..(i + 7).min(code.len())])
                    .collect();
                println!(
                    "  {group}  {}  ({} working days)",
                    weeks.join(" "),
                    ShiftType::ALL
                        .iter()
                        .filter(|s| s.is_working())
                        .map(|s| pattern.count(*s))
                        .sum::<usize>()
                );
            }
            None => println!("  {group}  (no pattern, always rest)"),
        }
    }
    Ok(())
}
