//! Orientation math - чистые функции над углами (градусы)
//!
//! Конвенция осей (Bevy, Y-up):
//! - yaw = 0 смотрит вдоль -Z, положительный yaw - против часовой стрелки вокруг +Y
//!   (совпадает с `Quat::from_rotation_y`)
//! - pitch положительный вверх
//!
//! Все функции тотальны для конечных входов, состояния нет.

use bevy::prelude::*;

/// Порог "почти ноль" для квадрата расстояния в interp
const SMALL_NUMBER: f32 = 1.0e-8;

/// Порог "почти ноль" для углового delta
const KINDA_SMALL_NUMBER: f32 = 1.0e-4;

/// Нормализует угол в (-180, 180]
pub fn normalize_axis(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Кратчайшая знаковая разница `a - b` в (-180, 180]
pub fn normalized_delta(a: f32, b: f32) -> f32 {
    normalize_axis(a - b)
}

/// Доля `value` внутри [min, max] (без clamp)
///
/// Нулевая ширина диапазона: 1.0 если value >= max, иначе 0.0.
pub fn range_pct(min: f32, max: f32, value: f32) -> f32 {
    let divisor = max - min;
    if divisor.abs() <= SMALL_NUMBER {
        return if value >= max { 1.0 } else { 0.0 };
    }
    (value - min) / divisor
}

/// Линейный remap с clamp входа в `in_range` (x = min, y = max)
///
/// Выход всегда внутри `out_range`.
pub fn remap_clamped(value: f32, in_range: Vec2, out_range: Vec2) -> f32 {
    let pct = range_pct(in_range.x, in_range.y, value).clamp(0.0, 1.0);
    out_range.x + (out_range.y - out_range.x) * pct
}

/// Плавное приближение `current` к `target` со скоростью `speed` (1/сек)
///
/// За один шаг проходится доля `clamp(dt * speed, 0, 1)` оставшегося расстояния.
pub fn finterp_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }

    let dist = target - current;
    if dist * dist < SMALL_NUMBER {
        return target;
    }

    current + dist * (dt * speed).clamp(0.0, 1.0)
}

/// Угловой вариант `finterp_to` (идёт по кратчайшей дуге, результат нормализован)
pub fn rinterp_yaw_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if dt == 0.0 || current == target {
        return current;
    }
    if speed <= 0.0 {
        return target;
    }

    let delta = normalized_delta(target, current);
    if delta.abs() <= KINDA_SMALL_NUMBER {
        return target;
    }

    normalize_axis(current + delta * (dt * speed).clamp(0.0, 1.0))
}

/// Скорость в горизонтальной плоскости (Y обнулён)
pub fn planar_speed(velocity: Vec3) -> f32 {
    Vec3::new(velocity.x, 0.0, velocity.z).length()
}

/// Yaw направления (только XZ компонента); нулевой вектор → 0
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    if direction.x * direction.x + direction.z * direction.z < SMALL_NUMBER {
        return 0.0;
    }
    (-direction.x).atan2(-direction.z).to_degrees()
}

/// Yaw поворота transform в той же конвенции, (-180, 180]
pub fn yaw_from_rotation(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    normalize_axis(yaw.to_degrees())
}

/// Квантует угол в байт (256 шагов по кругу)
///
/// Отрицательные углы после decompress приходят как [180, 360):
/// отсюда pitch artifact на proxy views.
pub fn compress_axis_to_byte(angle: f32) -> u8 {
    ((angle * 256.0 / 360.0).round() as i32 & 0xFF) as u8
}

/// Обратная операция к `compress_axis_to_byte`, результат в [0, 360)
pub fn decompress_axis_from_byte(value: u8) -> f32 {
    value as f32 * 360.0 / 256.0
}
