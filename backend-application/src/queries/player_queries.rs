use tracing::{info, warn};

use backend_domain::{BattleLog, Fetched, Player, PlayerTag};

use crate::{AppError, AppState};

pub async fn get_player(state: &AppState, raw_tag: &str) -> Result<Player, AppError> {
    let tag = parse_tag(raw_tag)?;
    match state.data_source.player(&tag).await {
        Fetched::Failed(err) => {
            warn!("player {} unavailable upstream: {}", tag, err);
            Err(AppError::not_found_with("Player not found", "tag", raw_tag))
        }
        outcome => {
            let source = outcome.label();
            let player = outcome
                .into_option()
                .ok_or_else(|| AppError::not_found_with("Player not found", "tag", raw_tag))?;
            info!(
                "player {} served from {} with {} brawlers",
                tag,
                source,
                player.brawler_count()
            );
            Ok(player)
        }
    }
}

pub async fn get_battle_log(state: &AppState, raw_tag: &str) -> Result<BattleLog, AppError> {
    let tag = parse_tag(raw_tag)?;
    match state.data_source.battle_log(&tag).await {
        Fetched::Failed(err) => {
            warn!("battle log for {} unavailable upstream: {}", tag, err);
            Err(AppError::not_found_with("Battle log not found", "tag", raw_tag))
        }
        outcome => outcome
            .into_option()
            .ok_or_else(|| AppError::not_found_with("Battle log not found", "tag", raw_tag)),
    }
}

fn parse_tag(raw_tag: &str) -> Result<PlayerTag, AppError> {
    PlayerTag::parse(raw_tag).map_err(|err| AppError::BadRequest(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_state, StubSource};
    use backend_domain::{mock_player, UpstreamError};

    #[tokio::test]
    async fn upstream_failure_is_reported_as_not_found_with_the_requested_tag() {
        let source = StubSource {
            player: Fetched::Failed(UpstreamError::Status(503)),
            ..StubSource::default()
        };
        let state = test_state(source);
        match get_player(&state, "ABC123").await {
            Err(AppError::NotFound { message, context }) => {
                assert_eq!(message, "Player not found");
                assert_eq!(context["tag"], "ABC123");
            }
            other => panic!("unexpected result: {:?}", other.map(|p| p.tag)),
        }
    }

    #[tokio::test]
    async fn player_lookup_normalizes_the_tag() {
        let tag = PlayerTag::parse("ABC123").expect("tag");
        let source = StubSource {
            player: Fetched::Cached(mock_player(&tag)),
            ..StubSource::default()
        };
        let state = test_state(source);
        let player = get_player(&state, "ABC123").await.expect("player");
        assert_eq!(player.tag, "#ABC123");
    }

    #[tokio::test]
    async fn malformed_tag_is_a_bad_request() {
        let state = test_state(StubSource::default());
        assert!(matches!(
            get_battle_log(&state, "not a tag").await,
            Err(AppError::BadRequest(_))
        ));
    }
}
