mod coordinate;
mod visit_grid;
