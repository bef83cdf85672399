mod agg;
mod sweep_spec;
