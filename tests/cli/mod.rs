mod config;
mod info;
mod run;
mod support;
mod weight;
