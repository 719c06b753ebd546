use super::*;

fn particle_at(id: u32, x: f32, y: f32) -> Particle {
    Particle::new(id, Vec2::new(x, y))
}

#[test]
fn grid_100x100_has_25_cells_with_unique_indices() {
    let world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    assert_eq!(world.dimensions(), (5, 5));
    assert_eq!(world.cells().len(), 25);

    for (i, cell) in world.cells().iter().enumerate() {
        assert_eq!(cell.index(), i);
        let (row, col) = world.coords(i);
        assert_eq!(cell.position(), Vec2::new(col as f32 * 20.0, row as f32 * 20.0));
    }
}

#[test]
fn neighbor_counts_follow_grid_position() {
    let world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");

    for cell in world.cells() {
        let (row, col) = world.coords(cell.index());
        let edge_rows = (row == 0 || row == 4) as usize;
        let edge_cols = (col == 0 || col == 4) as usize;
        let (expected, searched) = match edge_rows + edge_cols {
            2 => (3, 4),
            1 => (5, 6),
            _ => (8, 9),
        };
        assert_eq!(cell.neighbors().len(), expected, "cell ({}, {})", row, col);
        // Candidate queries also search the cell itself.
        let mut searched_cells = cell.neighbors().to_vec();
        searched_cells.push(cell.index());
        searched_cells.dedup();
        assert_eq!(searched_cells.len(), searched);
        assert!(!cell.neighbors().contains(&cell.index()));
    }

    let corner = world.cell(0).expect("corner");
    let mut n = corner.neighbors().to_vec();
    n.sort_unstable();
    assert_eq!(n, vec![1, 5, 6]);

    let interior = world.cell(world.index(2, 2)).expect("interior");
    assert_eq!(interior.neighbors(), &[6, 7, 8, 11, 13, 16, 17, 18]);
}

#[test]
fn non_square_world_keeps_columns_along_x() {
    let world = World::with_cell_width(100.0, 40.0, 20.0).expect("valid world");
    assert_eq!(world.dimensions(), (5, 2));
    assert_eq!(world.cells().len(), 10);

    let last = world.cells().last().expect("cells");
    assert_eq!(last.position(), Vec2::new(80.0, 20.0));
    assert_eq!(world.locate(Vec2::new(99.0, 39.0)), Some(9));
}

#[test]
fn partial_cells_cover_the_far_edge() {
    let world = World::with_cell_width(50.0, 50.0, 20.0).expect("valid world");
    assert_eq!(world.dimensions(), (3, 3));
    assert_eq!(world.locate(Vec2::new(50.0, 50.0)), Some(8));
}

#[test]
fn invalid_world_size_is_rejected() {
    assert!(matches!(
        World::new(0.0, 10.0),
        Err(ConfigError::InvalidWorldSize { .. })
    ));
    assert!(World::new(f32::NAN, 10.0).is_err());
    assert!(World::with_cell_width(10.0, 10.0, 0.0).is_err());
}

#[test]
fn oversized_world_is_rejected_not_allocated() {
    // column count saturates; the product would overflow
    assert!(matches!(
        World::new(1e30, 1e30),
        Err(ConfigError::InvalidWorldSize { .. })
    ));
    assert!(matches!(
        World::new(1e30, 100.0),
        Err(ConfigError::InvalidWorldSize { .. })
    ));
    // fits in usize but exceeds the cell cap
    assert!(World::new(1e6, 1e6).is_err());
}

#[test]
fn locate_resolves_shared_edges_to_first_cell() {
    let world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    assert_eq!(world.locate(Vec2::new(0.0, 0.0)), Some(0));
    assert_eq!(world.locate(Vec2::new(20.0, 0.0)), Some(0));
    assert_eq!(world.locate(Vec2::new(20.5, 0.0)), Some(1));
    assert_eq!(world.locate(Vec2::new(45.0, 61.0)), Some(world.index(3, 2)));
    assert_eq!(world.locate(Vec2::new(-0.1, 5.0)), None);
    assert_eq!(world.locate(Vec2::new(5.0, 100.1)), None);
}

#[test]
fn rebucket_keeps_exactly_one_membership() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let mut p = particle_at(0, 10.0, 10.0);

    world.rebucket(&mut p);
    assert_eq!(p.cell, Some(0));

    // Rebucketing again without moving must not duplicate.
    world.rebucket(&mut p);
    assert_eq!(world.cell(0).map(|c| c.particles().len()), Some(1));

    p.position = Vec2::new(50.0, 10.0);
    world.rebucket(&mut p);
    assert_eq!(p.cell, Some(2));
    assert!(world.cell(0).map(|c| c.particles().is_empty()).unwrap_or(false));
    assert_eq!(world.cell(2).map(|c| c.particles().to_vec()), Some(vec![0]));

    let total: usize = world.cells().iter().map(|c| c.particles().len()).sum();
    assert_eq!(total, 1);
}

#[test]
fn leaving_the_world_unassigns() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let mut p = particle_at(0, 10.0, 10.0);
    world.rebucket(&mut p);

    p.position = Vec2::new(10.0, 140.0);
    assert!(world.is_out_of_bounds(&p));
    world.rebucket(&mut p);
    assert_eq!(p.cell, None);
    assert_eq!(world.occupied_cells(), 0);
    assert_eq!(world.candidate_neighbors(&p).count(), 0);
    assert!(world.nearest_boundary(&p).is_none());
}

#[test]
fn clear_buckets_empties_every_cell() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let mut a = particle_at(0, 10.0, 10.0);
    let mut b = particle_at(1, 90.0, 90.0);
    world.rebucket(&mut a);
    world.rebucket(&mut b);
    assert_eq!(world.occupied_cells(), 2);

    world.clear_buckets();
    assert_eq!(world.occupied_cells(), 0);

    // Stale cell handles are harmless after a clear.
    world.rebucket(&mut a);
    assert_eq!(world.cell(0).map(|c| c.particles().len()), Some(1));
}

#[test]
fn candidates_cover_own_and_adjacent_cells_only() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let mut particles = vec![
        particle_at(0, 50.0, 50.0), // cell (2, 2)
        particle_at(1, 51.0, 50.0), // same cell
        particle_at(2, 30.0, 30.0), // (1, 1), diagonal neighbor
        particle_at(3, 70.0, 50.0), // (2, 3), east neighbor
        particle_at(4, 90.0, 90.0), // (4, 4), too far
    ];
    for p in particles.iter_mut() {
        world.rebucket(p);
    }

    let mut found: Vec<usize> = world.candidate_neighbors(&particles[0]).collect();
    found.sort_unstable();
    assert_eq!(found, vec![0, 1, 2, 3]);
}

#[test]
fn boundary_registers_only_with_intersecting_cells() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let plane = world
        .add_boundary(Vec2::new(0.0, 90.0), Vec2::new(100.0, 90.0), 0.02)
        .expect("valid boundary");
    assert_eq!(plane, 0);

    for cell in world.cells() {
        let (row, _) = world.coords(cell.index());
        if row == 4 {
            assert_eq!(cell.planes(), &[0]);
        } else {
            assert!(cell.planes().is_empty(), "row {} should not see the floor", row);
        }
    }
}

#[test]
fn boundary_on_cell_edge_touches_both_rows() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    world
        .add_boundary(Vec2::new(0.0, 40.0), Vec2::new(30.0, 40.0), 0.0)
        .expect("valid boundary");
    let with_plane: Vec<usize> = world
        .cells()
        .iter()
        .filter(|c| !c.planes().is_empty())
        .map(|c| c.index())
        .collect();
    assert_eq!(with_plane, vec![5, 6, 10, 11]);
}

#[test]
fn degenerate_boundaries_are_rejected() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    let p = Vec2::new(10.0, 10.0);
    assert_eq!(world.add_boundary(p, p, 0.02), Err(ConfigError::DegenerateBoundary));
    assert_eq!(
        world.add_boundary(p, Vec2::new(f32::INFINITY, 0.0), 0.02),
        Err(ConfigError::DegenerateBoundary)
    );
    assert_eq!(
        world.add_boundary(p, Vec2::new(20.0, 10.0), -1.0),
        Err(ConfigError::InvalidFriction(-1.0))
    );
    assert_eq!(world.plane_count(), 0);
}

#[test]
fn nearest_boundary_picks_minimum_distance() {
    let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("valid world");
    world
        .add_boundary(Vec2::new(0.0, 15.0), Vec2::new(20.0, 15.0), 0.0)
        .expect("floor");
    world
        .add_boundary(Vec2::new(2.0, 0.0), Vec2::new(2.0, 20.0), 0.0)
        .expect("wall");

    let mut p = particle_at(0, 3.0, 5.0);
    world.rebucket(&mut p);
    let nearest = world.nearest_boundary(&p).expect("cell has planes");
    assert!((nearest.distance_to(p.position) - 1.0).abs() < 1e-6);

    let mut far = particle_at(1, 80.0, 80.0);
    world.rebucket(&mut far);
    assert!(world.nearest_boundary(&far).is_none());
}
