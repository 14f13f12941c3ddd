//! Slide resolution
//!
//! An object pushed in a direction travels until something stops it: the
//! board edge, solid terrain, another object, or plain (non-slippery) ground.
//! The first three stop it *before* the offending cell; plain ground stops it
//! *on* the cell it just entered. An object standing in the way is itself
//! slid in the same direction first, and the pusher then travels over
//! whatever occupancy is left.

use super::board::{Board, ObjectId, ObjectKind};

/// Slide one object in direction `(dx, dy)` (a unit vector in practice) and
/// report whether it ended up somewhere new.
///
/// The push is resolved depth-first: if the first candidate cell holds
/// another object, that object's slide runs to completion, chained pushes
/// included, before this object's travel is computed against the updated
/// board. The push outcome is not inspected; a pusher whose path stays
/// blocked simply does not move.
///
/// A `(0, 0)` direction is a no-op returning `false`.
pub fn slide(board: &mut Board, id: ObjectId, dx: i32, dy: i32) -> bool {
    let Some(obj) = board.object(id) else {
        return false;
    };
    let (start_x, start_y) = (obj.x, obj.y);

    // First candidate cell. Off the board means the slide fails outright,
    // before any push is attempted.
    let (cand_x, cand_y) = (start_x + dx, start_y + dy);
    if !board.is_on_board(cand_x, cand_y) {
        return false;
    }

    if let Some(other) = board.object_at(cand_x, cand_y) {
        let other_id = other.id;
        // The zero-vector case finds the object itself; everything else is a
        // genuine push.
        if other_id != id {
            slide(board, other_id, dx, dy);
        }
    }

    // Walk the travel path. `rest` is the last accepted cell; a blocked step
    // leaves it where it was, a friction step accepts the landing cell and
    // then stops.
    let (mut rest_x, mut rest_y) = (start_x, start_y);
    let (mut cur_x, mut cur_y) = (cand_x, cand_y);
    loop {
        if !board.is_on_board(cur_x, cur_y) || board.object_at(cur_x, cur_y).is_some() {
            break;
        }
        let Ok(cell) = board.cell_at(cur_x, cur_y) else {
            break;
        };
        if cell.is_solid() {
            break;
        }
        rest_x = cur_x;
        rest_y = cur_y;
        if !cell.is_slippery() {
            break;
        }
        cur_x += dx;
        cur_y += dy;
    }

    let moved = board.move_object(id, rest_x, rest_y);
    if moved {
        log::debug!(
            "object {id} slid ({dx}, {dy}): ({start_x}, {start_y}) -> ({rest_x}, {rest_y})"
        );
    }
    moved
}

/// Slide every player object in direction `(dx, dy)`. Returns true if any of
/// them moved. The reference puzzles have exactly one player; the fan-out
/// keeps the entry point total regardless.
pub fn move_player(board: &mut Board, dx: i32, dy: i32) -> bool {
    let ids: Vec<ObjectId> = board
        .objects_of(ObjectKind::Player)
        .iter()
        .map(|o| o.id)
        .collect();
    let mut moved = false;
    for id in ids {
        moved |= slide(board, id, dx, dy);
    }
    moved
}
