/// Player ↔ prey and player ↔ obstacle overlap handling, plus the score and
/// lives bookkeeping that follows from it.

use crate::entities::{GameEvent, Obstacle, Player, Prey, Rect};

/// What got removed from the field this frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub caught: Vec<Prey>,
    pub hit: Vec<Obstacle>,
}

impl Resolution {
    pub fn life_lost(&self) -> bool {
        !self.hit.is_empty()
    }

    /// One `Catch` per prey, and a single `Hit` if any obstacle was struck.
    pub fn events(&self, player: &Player) -> Vec<GameEvent> {
        let mut events: Vec<GameEvent> = self
            .caught
            .iter()
            .map(|p| {
                let (x, y) = p.rect().center();
                GameEvent::Catch { x, y, kind: p.kind }
            })
            .collect();
        if self.life_lost() {
            let (x, y) = player.center();
            events.push(GameEvent::Hit { x, y });
        }
        events
    }
}

/// Split `items` into (overlapping, remaining) against `target`, keeping
/// the original order on both sides.
fn take_overlapping<T>(
    items: &mut Vec<T>,
    target: &Rect,
    rect_of: impl Fn(&T) -> Rect,
) -> Vec<T> {
    let (hit, kept): (Vec<T>, Vec<T>) = items
        .drain(..)
        .partition(|item| rect_of(item).overlaps(target));
    *items = kept;
    hit
}

/// Resolve this frame's overlaps.
///
/// Prey are only caught while `pouncing`; each one is removed and scores
/// its points.  Every overlapping obstacle is removed, but the player loses
/// at most one life per frame however many trees they ran into.
pub fn resolve(
    player: &Player,
    pouncing: bool,
    prey: &mut Vec<Prey>,
    obstacles: &mut Vec<Obstacle>,
    score: &mut u32,
    lives: &mut i32,
) -> Resolution {
    let bounds = player.rect();

    let caught = if pouncing {
        take_overlapping(prey, &bounds, Prey::rect)
    } else {
        Vec::new()
    };
    *score += caught.iter().map(Prey::points).sum::<u32>();

    let hit = take_overlapping(obstacles, &bounds, Obstacle::rect);
    if !hit.is_empty() {
        *lives -= 1;
    }

    Resolution { caught, hit }
}
