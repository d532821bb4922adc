use anyhow::{Context, Result};
use orgdir::{Directory, DirectoryConfig};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Orgdir Employee Directory v{}", orgdir::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => DirectoryConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => DirectoryConfig::default(),
    };
    let directory = Directory::bundled_with_config(config).context("loading bundled directory")?;

    demo_org_chart(&directory);
    demo_search(&directory);
    demo_reporting_chain(&directory);
    demo_team_insights(&directory);

    Ok(())
}

fn demo_org_chart(directory: &Directory) {
    println!("=== Demo 1: Org Chart ===");
    for entry in directory.org_chart() {
        println!(
            "{}{} ({}) [{}]",
            "  ".repeat(entry.depth),
            entry.employee.name,
            entry.employee.title,
            orgdir::OrganizationLevel::from_depth(entry.depth)
        );
    }
    println!();
}

fn demo_search(directory: &Directory) {
    println!("=== Demo 2: Search ===");
    for query in ["cybersecurity", "Finance", "  "] {
        let hits = directory.search_employees(query);
        println!("search {:?}: {} result(s)", query, hits.len());
        for employee in hits {
            println!("  - {} | {}", employee.name, employee.title);
        }
    }

    for question in [
        "Who works on cybersecurity in Dhahran?",
        "Who can I talk to about quantum computing?",
    ] {
        let answer = directory.interpret(question);
        println!("ask {:?}", question);
        if answer.is_unrecognized() {
            println!("  no vocabulary terms recognised");
        } else {
            println!("  {}", answer.summary());
            for team in &answer.teams {
                println!("  team: {}", team.name);
            }
        }
    }

    let mentors = directory.find_mentors("", &["Cybersecurity"]);
    println!("cybersecurity mentors: {}", mentors.len());
    println!();
}

fn demo_reporting_chain(directory: &Directory) {
    println!("=== Demo 3: Reporting Chain ===");
    for target in ["e011", "e001", "e999"] {
        match directory.reporting_chain(target) {
            Some(chain) => {
                let names: Vec<&str> = chain.iter().map(|e| e.name.as_str()).collect();
                println!("{}: {}", target, names.join(" -> "));
            }
            None => println!("{}: not in the org chart", target),
        }
    }
    if let Some(root) = directory.hierarchy_root() {
        println!(
            "{} has {} people in their organization",
            root.name,
            directory.total_reports(root.id.as_str()).unwrap_or(0)
        );
    }
    println!();
}

fn demo_team_insights(directory: &Directory) {
    println!("=== Demo 4: Team Insights ===");
    for team in directory.all_teams() {
        if let Some(insights) = directory.team_insights(team.id.as_str()) {
            println!("{}", team.name);
            for sentence in insights.sentences() {
                println!("  {}", sentence);
            }
        }
    }
}
