//! Console reporter with colored output

use crate::{AnalysisResults, ScoreResult};
use colored::{ColoredString, Colorize};

const TOP_ENTRIES: usize = 3;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show metrics on every card
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Show metrics on every dimension card
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report one analysis run as per-dimension cards plus the overall score.
    pub fn report(&self, results: &AnalysisResults) {
        println!();
        println!("{}", "📊 Content Quality Analysis".bold());
        if let Some(ref keyword) = results.target_keyword {
            println!("   Target keyword: {}", keyword);
        }
        println!();

        self.print_card("SEO", &results.seo);
        self.print_card("SERP", &results.serp);
        self.print_card("AEO", &results.aeo);
        self.print_card("Humanization", &results.humanization);
        self.print_card("Differentiation", &results.differentiation);
        if let Some(ref engagement) = results.engagement {
            self.print_card("Engagement", engagement);
        }

        if let Some(ref gaps) = results.gap_analysis {
            if !gaps.missing_elements.is_empty() {
                println!("{}", "Content gaps:".bold());
                for element in &gaps.missing_elements {
                    println!("  - {}", element);
                }
                println!();
            }
        }

        let overall = results.overall_score();
        println!(
            "{} {}",
            "Overall score:".bold(),
            self.colorize_score(overall)
        );
        println!();
    }

    /// Report in quiet mode (just the overall score)
    pub fn report_quiet(&self, results: &AnalysisResults) {
        println!("{}", results.overall_score());
    }

    fn print_card(&self, name: &str, result: &ScoreResult) {
        println!(
            "{} {}",
            format!("{}:", name).bold(),
            self.colorize_score(result.score)
        );
        if let Some(ref rank) = result.predicted_rank {
            println!("  Predicted rank: {}", rank);
        }
        for issue in result.issues.iter().take(TOP_ENTRIES) {
            println!("  {} {}", self.paint("✗", "red"), issue);
        }
        for recommendation in result.recommendations.iter().take(TOP_ENTRIES) {
            println!("  {} {}", self.paint("→", "cyan"), recommendation);
        }
        if self.verbose {
            if let Some(ref metrics) = result.metrics {
                for (key, value) in metrics {
                    println!("    {}: {}", key, value);
                }
            }
        }
        println!();
    }

    fn colorize_score(&self, score: u8) -> ColoredString {
        let text = format!("{}/100", score);
        if !self.use_colors {
            return text.normal();
        }
        match score {
            80..=100 => text.green().bold(),
            60..=79 => text.yellow().bold(),
            _ => text.red().bold(),
        }
    }

    fn paint(&self, symbol: &str, color: &str) -> ColoredString {
        if !self.use_colors {
            return symbol.normal();
        }
        match color {
            "red" => symbol.red(),
            "cyan" => symbol.cyan(),
            _ => symbol.normal(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
