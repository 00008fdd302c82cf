use super::*;
use crate::helpers::models::create_points_on_line;

#[test]
fn can_reverse_segment() {
    let mut tour = Tour::new(vec![0, 1, 2, 3, 4]);

    tour.reverse(1, 3);

    assert_eq!(tour.indices(), &[0, 3, 2, 1, 4]);
    assert_eq!(tour.visit_order(), vec![2, 1, 0, 3]);
}

#[test]
#[should_panic]
fn cannot_reverse_depot() {
    Tour::new(vec![0, 1, 2]).reverse(0, 2);
}

#[test]
#[should_panic]
fn cannot_create_tour_without_depot() {
    Tour::new(vec![1, 0]);
}

#[test]
fn can_calculate_distance() {
    let points = create_points_on_line(&[0., 1., 3.]);

    assert_eq!(Tour::new(vec![0]).distance(points.as_slice()), 0.);
    assert_approx_eq!(Tour::new(vec![0, 1, 2]).distance(points.as_slice()), 3. * 111.19492664, 1E-3);
    assert_approx_eq!(Tour::new(vec![0, 2, 1]).distance(points.as_slice()), 5. * 111.19492664, 1E-3);
}
