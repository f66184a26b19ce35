pub mod ride_rto;
