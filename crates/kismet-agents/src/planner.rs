//! The action planner.
//!
//! Every agent plans exactly three actions per month: one big action from
//! its strongest desire (or its locked domain) and two small actions from
//! the next strongest distinct domains.
//!
//! Desires are passed through the destiny bias *before* ranking. Ranking is
//! a stable descending sort over [`Domain::ALL`], so equal desires keep the
//! canonical domain order.

use kismet_types::{ActionType, Domain};
use tracing::debug;

use crate::actions::PlannedAction;
use crate::agent::Agent;
use crate::destiny::Destiny;

/// Number of small actions per month.
const SMALL_ACTIONS: usize = 2;

/// Big action for a domain.
pub const fn big_action_for(domain: Domain) -> ActionType {
    match domain {
        Domain::Love => ActionType::DeepRelationship,
        Domain::Career => ActionType::DeepWork,
        Domain::Social => ActionType::BigSocialEvent,
        Domain::Physical => ActionType::HealthPush,
        Domain::Learning => ActionType::DeepStudy,
        Domain::Rest => ActionType::MajorRest,
    }
}

/// Small action for a domain.
pub const fn small_action_for(domain: Domain) -> ActionType {
    match domain {
        Domain::Love => ActionType::CasualDate,
        Domain::Career => ActionType::Hobby,
        Domain::Social => ActionType::LightSocial,
        Domain::Physical => ActionType::LightExercise,
        Domain::Learning => ActionType::CasualLearning,
        Domain::Rest => ActionType::MinorRest,
    }
}

/// Domains ranked by destiny-biased desire, strongest first.
pub fn rank_domains(agent: &Agent, destiny: Destiny) -> Vec<(Domain, f64)> {
    let mut ranked: Vec<(Domain, f64)> = Domain::ALL
        .into_iter()
        .map(|domain| (domain, destiny.apply(agent, agent.desires.get(domain))))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Plan the month's actions: one big followed by two small.
///
/// The big domain is the top-ranked one unless the agent carries a
/// `locked_action_domain`. Small actions take the first two distinct
/// domains below the top rank, skipping the big domain. The top-ranked
/// domain never becomes a small action, even when the big action is
/// locked elsewhere. Should fewer than two qualify, domains below the top
/// rank are reused in rank order.
pub fn plan_agent_actions(agent: &Agent, destiny: Destiny) -> Vec<PlannedAction> {
    let ranked = rank_domains(agent, destiny);
    let top = ranked.first().map_or(Domain::Rest, |(domain, _)| *domain);
    let big_domain = agent.locked_action_domain.unwrap_or(top);

    if big_domain != top {
        debug!(agent = %agent.label, locked = %big_domain, top = %top, "Big action locked");
    }

    let mut small_domains: Vec<Domain> = Vec::with_capacity(SMALL_ACTIONS);
    for (domain, _) in ranked.iter().skip(1) {
        if small_domains.len() >= SMALL_ACTIONS {
            break;
        }
        if *domain != big_domain && !small_domains.contains(domain) {
            small_domains.push(*domain);
        }
    }
    // Only reachable with fewer than three domains.
    for (domain, _) in ranked.iter().skip(1) {
        if small_domains.len() >= SMALL_ACTIONS {
            break;
        }
        small_domains.push(*domain);
    }

    let mut actions = vec![PlannedAction::new(
        agent.label.clone(),
        big_action_for(big_domain),
        true,
    )];
    actions.extend(
        small_domains
            .into_iter()
            .map(|domain| PlannedAction::new(agent.label.clone(), small_action_for(domain), false)),
    );
    actions
}
