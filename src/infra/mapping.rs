use crate::api::dto::{ChildStatsDto, RecommendationDto, RoundViewDto};
use crate::domain::hand::score_cards;
use crate::domain::RoundId;
use crate::engine::RoundState;
use crate::mcts::Recommendation;

/// Что показывать из руки дилера.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealerVisibility {
    /// Только открытая карта, остальные - `None`.
    UpcardOnly,
    /// Все карты.
    Revealed,
}

impl DealerVisibility {
    /// Карты дилера открываются, когда ход игрока окончен.
    pub fn for_round(round: &RoundState) -> Self {
        if round.is_player_over() {
            DealerVisibility::Revealed
        } else {
            DealerVisibility::UpcardOnly
        }
    }
}

/// Маппинг RoundState -> RoundViewDto.
pub fn map_round_to_dto(
    round_id: RoundId,
    round: &RoundState,
    visibility: DealerVisibility,
) -> RoundViewDto {
    let dealer_cards: Vec<_> = round
        .dealer
        .cards
        .iter()
        .enumerate()
        .map(|(idx, &card)| match visibility {
            DealerVisibility::Revealed => Some(card),
            DealerVisibility::UpcardOnly if idx == 0 => Some(card),
            DealerVisibility::UpcardOnly => None,
        })
        .collect();

    RoundViewDto {
        round_id,
        player_cards: round.player.cards.clone(),
        player_value: round.player_value(),
        dealer_visible_value: score_cards(dealer_cards.iter().copied()),
        dealer_cards,
        moves: round.moves().to_vec(),
        player_over: round.is_player_over(),
        cards_remaining: round.deck.remaining_count(),
    }
}

/// Маппинг результата поиска в DTO.
pub fn map_recommendation_to_dto(rec: &Recommendation, budget: u32) -> RecommendationDto {
    RecommendationDto {
        action: rec.action,
        budget,
        children: rec
            .children
            .iter()
            .map(|c| ChildStatsDto {
                action: c.action,
                visits: c.visits,
                wins: c.wins,
                win_rate: c.win_rate(),
            })
            .collect(),
    }
}
