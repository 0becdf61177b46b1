use jaguar_hunt::compute::{PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_MIN_X, PLAYER_MIN_Y};
use jaguar_hunt::entities::Player;
use jaguar_hunt::spawner::Spawner;
use jaguar_hunt::InputState;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn input_strategy() -> impl Strategy<Value = InputState> {
    any::<(bool, bool, bool, bool)>().prop_map(|(left, right, up, down)| InputState {
        left,
        right,
        up,
        down,
    })
}

proptest! {
    #[test]
    fn player_always_inside_playfield(
        start_x in PLAYER_MIN_X..=PLAYER_MAX_X,
        start_y in PLAYER_MIN_Y..=PLAYER_MAX_Y,
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut player = Player::new();
        player.x = start_x;
        player.y = start_y;
        for input in &inputs {
            player.update(input);
            prop_assert!(player.x >= PLAYER_MIN_X && player.x <= PLAYER_MAX_X, "x={}", player.x);
            prop_assert!(player.y >= PLAYER_MIN_Y && player.y <= PLAYER_MAX_Y, "y={}", player.y);
        }
    }

    #[test]
    fn pounce_timers_never_disagree(
        inputs in prop::collection::vec((input_strategy(), any::<bool>()), 1..200),
    ) {
        let mut player = Player::new();
        for (input, try_pounce) in &inputs {
            if *try_pounce {
                player.pounce();
            }
            // An active pounce always has cooldown left to run
            if player.pounce_timer > 0 {
                prop_assert!(player.pounce_cooldown > player.pounce_timer);
            }
            player.update(input);
        }
    }

    #[test]
    fn spawn_rate_is_monotone_and_floored(seed in any::<u64>(), ticks in 1usize..12_000) {
        let mut spawner = Spawner::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut last = spawner.spawn_rate;
        for _ in 0..ticks {
            spawner.tick(&mut rng);
            prop_assert!(spawner.spawn_rate <= last);
            prop_assert!(spawner.spawn_rate >= 30);
            prop_assert!(last - spawner.spawn_rate <= 2);
            last = spawner.spawn_rate;
        }
    }
}
