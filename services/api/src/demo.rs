use crate::infra::{read_members, sample_directory, InMemoryTeamDirectory};
use clap::Args;
use serde::Serialize;
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use team_synergy::config::{AppConfig, EngineConfig};
use team_synergy::error::AppError;
use team_synergy::synergy::{
    EvaluationRequest, MemberRecommendations, ProjectType, RankingRequest,
    RecommendationRequest, SizeCategory, TeamGapReport, TeamId, TeamSynergyService,
};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding an array of team members
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Project type (innovation, execution, client_facing, strategic, research, balanced)
    #[arg(long, value_parser = parse_project)]
    pub(crate) project: Option<ProjectType>,
    /// Size category (small, medium, large)
    #[arg(long, value_parser = parse_size)]
    pub(crate) size: Option<SizeCategory>,
    /// Historical success prior between 0 and 1
    #[arg(long)]
    pub(crate) prior: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// JSON file holding the current team
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// JSON file holding the candidate pool
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Project type used for scoring
    #[arg(long, value_parser = parse_project)]
    pub(crate) project: Option<ProjectType>,
    /// Number of candidates to return (1-20)
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only show one of the sample teams
    #[arg(long)]
    pub(crate) team: Option<String>,
    /// Project type used for recommendations
    #[arg(long, value_parser = parse_project)]
    pub(crate) project: Option<ProjectType>,
    /// Number of recommendations per team
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
}

/// Unknown labels fall back to `balanced`, matching the HTTP API.
fn parse_project(raw: &str) -> Result<ProjectType, Infallible> {
    Ok(ProjectType::from_label(raw))
}

fn parse_size(raw: &str) -> Result<SizeCategory, String> {
    SizeCategory::parse_label(raw)
        .ok_or_else(|| format!("unknown size category '{raw}' (expected small, medium or large)"))
}

fn engine_config() -> Result<EngineConfig, AppError> {
    Ok(AppConfig::load()?.engine)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let service = TeamSynergyService::new(
        Arc::new(InMemoryTeamDirectory::default()),
        engine_config()?,
    );
    let report = service.evaluate(EvaluationRequest {
        members: read_members(&args.roster)?,
        project_type: args.project,
        size_category: args.size,
        target_size: None,
        historical_success: args.prior,
    })?;
    print_json(&report)
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let service = TeamSynergyService::new(
        Arc::new(InMemoryTeamDirectory::default()),
        engine_config()?,
    );
    let report = service.rank(RankingRequest {
        team: read_members(&args.roster)?,
        candidates: read_members(&args.candidates)?,
        project_type: args.project,
        top_n: args.top_n,
    })?;
    print_json(&report)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let directory = sample_directory();
    let team_ids: Vec<TeamId> = match args.team {
        Some(team) => vec![TeamId(team)],
        None => directory.teams().map(|team| team.id.clone()).collect(),
    };
    let service = TeamSynergyService::new(Arc::new(directory), engine_config()?);

    println!("Team synergy demo");
    for team_id in team_ids {
        let gaps = service.team_gaps(&team_id)?;
        render_gaps(&gaps);

        let recommendations = service.recommend_members(
            &team_id,
            RecommendationRequest {
                project_type: args.project,
                top_n: args.top_n,
            },
        )?;
        render_recommendations(&recommendations);
    }

    Ok(())
}

fn render_gaps(report: &TeamGapReport) {
    println!("\n{} ({})", report.team_name, report.team_id);
    println!("Synergy score: {:.1}%", report.current_total * 100.0);

    println!("Score breakdown");
    for (factor, score) in report.detailed_scores.factors() {
        println!("- {}: {:.2}", factor.label(), score);
    }

    println!("Dimension mix");
    for (dimension, share) in report.insights.dimension_distribution.iter() {
        println!("- {}: {:.0}%", dimension.label(), share * 100.0);
    }

    println!("Strengths");
    for line in &report.insights.strengths {
        println!("- {line}");
    }
    println!("Weaknesses");
    for line in &report.insights.weaknesses {
        println!("- {line}");
    }

    if report.gaps.is_empty() {
        println!("Gaps: none");
    } else {
        println!("Gaps");
        for gap in &report.gaps {
            println!(
                "- [{}] {}: {} -> {}",
                gap.severity.label(),
                gap.area,
                gap.impact,
                gap.recommendation
            );
        }
    }
}

fn render_recommendations(result: &MemberRecommendations) {
    println!(
        "Recommended members for a {} project",
        result.project_type.label()
    );
    for (position, entry) in result.recommendations.iter().enumerate() {
        let candidate = &entry.ranked.candidate;
        println!(
            "{}. {} ({}, {}) -> {:.1}% ({:+.1} pts)",
            position + 1,
            candidate.name,
            candidate.type_code,
            candidate.type_code.display_name(),
            entry.ranked.predicted_total * 100.0,
            entry.ranked.improvement * 100.0
        );
        println!("   {}", entry.reasoning);
        println!("   strengths: {}", entry.strengths.join(", "));
        println!("   watch for: {}", entry.challenges.join(", "));
    }
}
