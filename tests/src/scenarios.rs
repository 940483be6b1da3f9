mod enrollment;
mod properties;
mod reporting;
