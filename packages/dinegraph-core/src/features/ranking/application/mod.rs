//! Ranking Application Layer (UseCase)

mod ranking_usecase;

pub use ranking_usecase::{
    RankingInput, RankingOutput, RankingStats, RankingUseCase, RankingUseCaseImpl,
};
